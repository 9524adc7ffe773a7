use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in PNG and BMP images
#[derive(Args, Debug)]
pub struct HideTextArgs {
    /// Cover image such as a PNG or BMP file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover image", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideTextArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::hide_text(&self.image, &self.write_to_file, &self.message)
    }
}
