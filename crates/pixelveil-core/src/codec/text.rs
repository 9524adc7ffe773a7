//! Hides a text message one bit per color channel in the least significant
//! bits of a cover image, raster order, and unveils it again.

use image::RgbImage;

use crate::bits::{self, DELIMITER};
use crate::error::StegoError;
use crate::result::Result;

/// Embeds `text` into the LSBs of a copy of `cover`.
///
/// The payload is the message bits followed by [`DELIMITER`]. Bits are
/// written into R, then G, then B of every pixel, rows top to bottom;
/// every pixel beyond the payload stays untouched.
///
/// Fails with [`StegoError::TextCapacity`] when the payload does not fit
/// into `3 * width * height` bits. An exact fit succeeds.
pub fn hide_text(cover: &RgbImage, text: &str) -> Result<RgbImage> {
    let mut payload = bits::text_to_bits(text)?;
    payload.extend_from_slice(&DELIMITER);

    let (width, height) = cover.dimensions();
    let available = width as usize * height as usize * 3;
    if payload.len() > available {
        return Err(StegoError::TextCapacity {
            required: payload.len(),
            available,
        });
    }

    let mut stego = cover.clone();
    let mut next_bit = payload.iter().copied();
    'pixels: for y in 0..height {
        for x in 0..width {
            let pixel = stego.get_pixel_mut(x, y);
            for channel in pixel.0.iter_mut() {
                match next_bit.next() {
                    Some(bit) => *channel = (*channel & 0xFE) | bit,
                    None => break 'pixels,
                }
            }
        }
    }

    Ok(stego)
}

/// Collects channel LSBs in the embedding order until the first occurrence
/// of [`DELIMITER`], then decodes the prefix.
///
/// Returns `None` when the whole image is scanned without finding the
/// sentinel.
pub fn extract_text(stego: &RgbImage) -> Option<String> {
    let (width, height) = stego.dimensions();
    let mut stream: Vec<u8> = Vec::with_capacity(width as usize * height as usize * 3);

    for y in 0..height {
        for x in 0..width {
            let pixel = stego.get_pixel(x, y);
            for channel in pixel.0.iter() {
                stream.push(channel & 1);
                // the first occurrence is always a suffix of the stream at
                // the moment its last bit arrives
                if stream.ends_with(&DELIMITER) {
                    stream.truncate(stream.len() - DELIMITER.len());
                    return Some(bits::bits_to_text(&stream));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn noisy_cover(width: u32, height: u32) -> RgbImage {
        // even channel values only, so the plain LSB stream is all zero
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 34) % 256) as u8,
                ((y * 46) % 256) as u8,
                (((x + y) * 62) % 256) as u8,
            ])
        })
    }

    #[test]
    fn should_roundtrip_a_message() {
        let cover = noisy_cover(32, 32);
        let stego = hide_text(&cover, "Hello, World!").unwrap();

        assert_eq!(extract_text(&stego).as_deref(), Some("Hello, World!"));
    }

    #[test]
    fn should_roundtrip_the_empty_message() {
        let cover = noisy_cover(8, 8);
        let stego = hide_text(&cover, "").unwrap();

        assert_eq!(extract_text(&stego).as_deref(), Some(""));
    }

    #[test]
    fn should_match_the_documented_bit_layout_for_hi() {
        let cover = RgbImage::new(4, 4);
        let stego = hide_text(&cover, "hi").unwrap();

        let mut lsb_stream = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                for channel in stego.get_pixel(x, y).0.iter() {
                    lsb_stream.push(channel & 1);
                    // nothing but the LSB may differ from the black cover
                    assert_eq!(channel & 0xFE, 0);
                }
            }
        }

        let expected: Vec<u8> = [0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1]
            .iter()
            .chain(DELIMITER.iter())
            .copied()
            .collect();
        assert_eq!(&lsb_stream[..expected.len()], &expected[..]);
        assert!(lsb_stream[expected.len()..].iter().all(|&bit| bit == 0));
    }

    #[test]
    fn should_leave_every_bit_outside_the_payload_untouched() {
        let cover = noisy_cover(16, 16);
        let stego = hide_text(&cover, "hi").unwrap();

        let payload_bits = 2 * 8 + DELIMITER.len();
        let mut index = 0;
        for y in 0..16 {
            for x in 0..16 {
                let before = cover.get_pixel(x, y);
                let after = stego.get_pixel(x, y);
                for (b, a) in before.0.iter().zip(after.0.iter()) {
                    assert_eq!(b & 0xFE, a & 0xFE, "high bits changed at ({x}, {y})");
                    if index >= payload_bits {
                        assert_eq!(b, a, "channel beyond the payload changed at ({x}, {y})");
                    }
                    index += 1;
                }
            }
        }
    }

    #[test]
    fn should_accept_a_payload_that_exactly_fills_the_cover() {
        // 4x4 cover: 48 slots == 4 chars * 8 + 16 delimiter bits
        let cover = noisy_cover(4, 4);
        let stego = hide_text(&cover, "abcd").unwrap();

        assert_eq!(extract_text(&stego).as_deref(), Some("abcd"));
    }

    #[test]
    fn should_fail_instead_of_truncating_an_oversized_payload() {
        let cover = noisy_cover(4, 4);
        match hide_text(&cover, "abcde") {
            Err(StegoError::TextCapacity {
                required: 56,
                available: 48,
            }) => (),
            other => panic!("expected TextCapacity, got {other:?}"),
        }
    }

    #[test]
    fn should_report_not_found_on_a_plain_image() {
        assert_eq!(extract_text(&noisy_cover(16, 16)), None);
    }
}
