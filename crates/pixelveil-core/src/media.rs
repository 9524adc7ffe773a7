//! File boundary around the pure codec: decoding a lossless carrier into
//! an [`RgbImage`] and persisting a stego result again.

use std::fs::File;
use std::path::Path;

pub use image::RgbImage;
use log::error;

use crate::error::StegoError;
use crate::result::Result;

/// a lossless media container for steganography
#[derive(Debug)]
pub enum Media {
    Image(RgbImage),
}

impl Media {
    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    /// Decodes a PNG or BMP file into 3-channel RGB. Anything lossy is
    /// rejected up front, it would not survive the payload.
    pub fn from_file(f: &Path) -> Result<Self> {
        if let Some(ext) = f.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            match ext.as_str() {
                "png" | "bmp" => Ok(Self::Image(
                    image::open(f)
                        .map_err(|_e| StegoError::InvalidImageMedia)?
                        .to_rgb8(),
                )),
                _ => Err(StegoError::UnsupportedMedia),
            }
        } else {
            Err(StegoError::UnsupportedMedia)
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        match self {
            Media::Image(i) => i,
        }
    }

    pub fn into_image(self) -> RgbImage {
        match self {
            Media::Image(i) => i,
        }
    }
}

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

impl Media {
    /// Always encodes as PNG, the only wire format a stego image leaves
    /// this crate in.
    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i
                .write_to(&mut writer, image::ImageFormat::Png)
                .map_err(|e| {
                    error!("Error saving image: {e}");
                    StegoError::ImageEncodingError
                }),
        }
    }
}
