use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::{Media, Persist};
use crate::{StegoError, DEFAULT_SEED};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// File oriented builder over the pure codec: one cover image in, one stego
/// image out, carrying either a text message or a secret image.
#[derive(Debug)]
pub struct HideApi {
    message: Option<String>,
    secret_image: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: u64,
}

impl Default for HideApi {
    fn default() -> Self {
        Self {
            message: None,
            secret_image: None,
            image: None,
            output: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the slot sampling seed, only relevant when hiding a secret image
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let cover = Media::from_file(&image)?.into_image();

        let stego = if let Some(message) = self.message {
            codec::hide_text(&cover, &message)?
        } else if let Some(secret_image) = self.secret_image {
            let secret = Media::from_file(&secret_image)?.into_image();
            codec::hide_image(&cover, &secret, self.seed)?
        } else {
            return Err(StegoError::MissingPayload);
        };

        Media::from_image(stego).save_as(&output)
    }

    fn validate(&self) -> Result<(), StegoError> {
        match (&self.message, &self.secret_image) {
            (None, None) => Err(StegoError::MissingPayload),
            (Some(_), Some(_)) => Err(StegoError::AmbiguousPayload),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        Media::from_image(RgbImage::from_fn(32, 32, |x, y| {
            image::Rgb([x as u8, y as u8, 7])
        }))
        .save_as(&carrier)
        .expect("Failed to write carrier image");

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn should_refuse_message_and_secret_image_at_once() {
        let result = crate::api::hide::prepare()
            .with_message("hi")
            .with_secret_image("secret.png")
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();
        match result {
            Err(StegoError::AmbiguousPayload) => (),
            other => panic!("expected AmbiguousPayload, got {other:?}"),
        }
    }

    #[test]
    fn should_refuse_an_empty_payload() {
        let result = crate::api::hide::prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();
        match result {
            Err(StegoError::MissingPayload) => (),
            other => panic!("expected MissingPayload, got {other:?}"),
        }
    }

    #[test]
    fn should_require_a_carrier() {
        let result = crate::api::hide::prepare().with_message("hi").execute();
        match result {
            Err(StegoError::CarrierNotSet) => (),
            other => panic!("expected CarrierNotSet, got {other:?}"),
        }
    }
}
