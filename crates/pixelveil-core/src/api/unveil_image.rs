use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::{Media, Persist};
use crate::{StegoError, DEFAULT_SEED};

pub fn prepare() -> UnveilImageApi {
    UnveilImageApi::default()
}

/// Recovers a hidden secret image from a stego image.
///
/// The seed must match the one used for hiding, otherwise the recovered
/// pixels are garbage (the dimension header is seed independent, so the
/// output size will still look plausible).
#[derive(Debug)]
pub struct UnveilImageApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: u64,
}

impl Default for UnveilImageApi {
    fn default() -> Self {
        Self {
            image: None,
            output: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl UnveilImageApi {
    pub fn with_stego_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let stego = Media::from_file(&image)?.into_image();
        let secret = codec::extract_image(&stego, self.seed)?;

        Media::from_image(secret).save_as(&output)
    }
}
