use std::path::PathBuf;

use clap::Args;
use pixelveil_core::DEFAULT_SEED;

use crate::CliResult;

/// Unveils a hidden secret image from a stego image
#[derive(Args, Debug)]
pub struct UnveilImageArgs {
    /// Stego image that contains a hidden secret image
    #[arg(short = 'i', long = "in", value_name = "stego image", required = true)]
    pub image: PathBuf,

    /// Recovered secret image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Seed used when the secret image was hidden
    #[arg(long, value_name = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl UnveilImageArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::unveil_image(&self.image, &self.write_to_file, self.seed)
    }
}
