use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a hidden text message from a stego image
#[derive(Args, Debug)]
pub struct UnveilTextArgs {
    /// Stego image that contains a hidden message
    #[arg(short = 'i', long = "in", value_name = "stego image", required = true)]
    pub image: PathBuf,

    /// Write the message to this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output text file")]
    pub write_to_file: Option<PathBuf>,
}

impl UnveilTextArgs {
    pub fn run(self) -> CliResult<()> {
        let message =
            pixelveil_core::commands::unveil_text(&self.image, self.write_to_file.as_deref())?;

        match message {
            Some(message) if self.write_to_file.is_none() => println!("{message}"),
            Some(_) => (),
            None => eprintln!("No hidden message found in {}", self.image.display()),
        }

        Ok(())
    }
}
