//! Hides a whole secret image inside a cover image and unveils it again.
//!
//! The secret's dimensions go into a fixed two pixel header; its pixel data
//! is spread, four high bits per channel, over cover coordinates picked by
//! the deterministic slot sampler. Recovery is lossy by construction: the
//! low nibble of every secret channel is gone.

use image::RgbImage;

use crate::error::StegoError;
use crate::result::Result;
use crate::sampler::{self, RESERVED_ROWS};

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Embeds `secret` into a copy of `cover`.
///
/// Preconditions, checked in order:
/// - the secret's dimensions must fit the 16 bit header fields,
/// - the cover must have at least as many pixels as the secret (a loose
///   check kept for compatibility; the header rows are not embeddable),
/// - enough eligible slots below the header rows must exist.
///
/// Slot `idx` receives secret pixel `(idx % secret_w, idx / secret_w)`:
/// each cover channel keeps its high nibble and takes the secret channel's
/// high nibble as its low one.
pub fn hide_image(cover: &RgbImage, secret: &RgbImage, seed: u64) -> Result<RgbImage> {
    let (cover_w, cover_h) = cover.dimensions();
    let (secret_w, secret_h) = secret.dimensions();

    if secret_w > u32::from(u16::MAX) || secret_h > u32::from(u16::MAX) {
        return Err(StegoError::SecretTooLarge(secret_w, secret_h));
    }

    let cover_pixels = cover_w as usize * cover_h as usize;
    let secret_pixels = secret_w as usize * secret_h as usize;
    if cover_pixels < secret_pixels {
        return Err(StegoError::CoverTooSmall {
            cover_pixels,
            secret_pixels,
        });
    }
    if cover_w == 0 || cover_h < RESERVED_ROWS {
        return Err(StegoError::InsufficientSlots {
            requested: secret_pixels,
            available: 0,
        });
    }

    let slots = sampler::sample_slots(cover_w, cover_h, secret_pixels, seed)?;

    let mut stego = cover.clone();
    write_dimension_header(&mut stego, secret_w as u16, secret_h as u16);

    for (idx, &(x, y)) in slots.iter().enumerate() {
        let sx = idx as u32 % secret_w;
        let sy = idx as u32 / secret_w;
        let secret_pixel = secret.get_pixel(sx, sy);
        let cover_pixel = stego.get_pixel_mut(x, y);
        for (channel, &s) in cover_pixel.0.iter_mut().zip(secret_pixel.0.iter()) {
            *channel = (*channel & 0xF0) | (s >> 4);
        }
    }

    Ok(stego)
}

/// Recovers the secret image hidden by [`hide_image`] with the same seed.
///
/// The dimensions come from the header pixels, the slot sequence is
/// recomputed from `(seed, cover domain)`. Every recovered channel is the
/// stego channel's low nibble shifted up, so its own low nibble is zero.
pub fn extract_image(stego: &RgbImage, seed: u64) -> Result<RgbImage> {
    let (cover_w, cover_h) = stego.dimensions();
    if cover_w == 0 || cover_h < RESERVED_ROWS {
        return Err(StegoError::InvalidImageMedia);
    }

    let (secret_w, secret_h) = read_dimension_header(stego);
    let slots = sampler::sample_slots(
        cover_w,
        cover_h,
        secret_w as usize * secret_h as usize,
        seed,
    )?;

    let mut secret = RgbImage::new(secret_w, secret_h);
    for (idx, &(x, y)) in slots.iter().enumerate() {
        let sx = idx as u32 % secret_w;
        let sy = idx as u32 / secret_w;
        let cover_pixel = stego.get_pixel(x, y);
        let secret_pixel = secret.get_pixel_mut(sx, sy);
        for (channel, &c) in secret_pixel.0.iter_mut().zip(cover_pixel.0.iter()) {
            *channel = (c & 0x0F) << 4;
        }
    }

    Ok(secret)
}

/// Secret width goes into R/G of pixel (0,0) as high and low byte, secret
/// height likewise into pixel (0,1). The B channel of both pixels stays
/// untouched.
fn write_dimension_header(stego: &mut RgbImage, secret_w: u16, secret_h: u16) {
    let pixel = stego.get_pixel_mut(0, 0);
    pixel.0[0] = (secret_w >> 8) as u8;
    pixel.0[1] = (secret_w & 0xFF) as u8;

    let pixel = stego.get_pixel_mut(0, 1);
    pixel.0[0] = (secret_h >> 8) as u8;
    pixel.0[1] = (secret_h & 0xFF) as u8;
}

fn read_dimension_header(stego: &RgbImage) -> (u32, u32) {
    let width_pixel = stego.get_pixel(0, 0);
    let height_pixel = stego.get_pixel(0, 1);
    (
        u32::from(width_pixel.0[0]) << 8 | u32::from(width_pixel.0[1]),
        u32::from(height_pixel.0[0]) << 8 | u32::from(height_pixel.0[1]),
    )
}
