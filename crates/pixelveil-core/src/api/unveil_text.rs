use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::Media;
use crate::StegoError;

pub fn prepare() -> UnveilTextApi {
    UnveilTextApi::default()
}

/// Scans a stego image for a hidden text message.
///
/// The message is returned; `None` means the whole image was scanned
/// without finding the end-of-message sentinel. With an output path set,
/// a found message is additionally written to that file.
#[derive(Default, Debug)]
pub struct UnveilTextApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnveilTextApi {
    pub fn with_stego_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|p| p.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Option<String>, StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let stego = Media::from_file(&image)?.into_image();
        let message = codec::extract_text(&stego);

        if let (Some(message), Some(output)) = (&message, &self.output) {
            std::fs::write(output, message)
                .map_err(|e| StegoError::WriteError { source: e })?;
        }

        Ok(message)
    }
}
