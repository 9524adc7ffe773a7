use std::path::Path;

use crate::StegoError;

pub fn hide_text(image: &Path, write_to_file: &Path, message: &str) -> Result<(), StegoError> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn unveil_text(
    image: &Path,
    write_to_file: Option<&Path>,
) -> Result<Option<String>, StegoError> {
    crate::api::unveil_text::prepare()
        .with_stego_image(image)
        .use_output(write_to_file)
        .execute()
}

pub fn hide_image(
    image: &Path,
    secret_image: &Path,
    write_to_file: &Path,
    seed: u64,
) -> Result<(), StegoError> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_secret_image(secret_image)
        .with_output(write_to_file)
        .with_seed(seed)
        .execute()
}

pub fn unveil_image(image: &Path, write_to_file: &Path, seed: u64) -> Result<(), StegoError> {
    crate::api::unveil_image::prepare()
        .with_stego_image(image)
        .with_output(write_to_file)
        .with_seed(seed)
        .execute()
}
