use std::path::PathBuf;

use clap::Args;
use pixelveil_core::DEFAULT_SEED;

use crate::CliResult;

/// Hides a secret image inside a cover image
#[derive(Args, Debug)]
pub struct HideImageArgs {
    /// Cover image such as a PNG or BMP file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover image", required = true)]
    pub image: PathBuf,

    /// The secret image that will be hidden
    #[arg(short = 's', long = "secret", value_name = "secret image", required = true)]
    pub secret_image: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Seed for the slot sampler; unveiling needs the same seed
    #[arg(long, value_name = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl HideImageArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::hide_image(
            &self.image,
            &self.secret_image,
            &self.write_to_file,
            self.seed,
        )
    }
}
