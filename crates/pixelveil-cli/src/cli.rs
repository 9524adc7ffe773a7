use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    HideText(hide_text::HideTextArgs),
    UnveilText(unveil_text::UnveilTextArgs),
    HideImage(hide_image::HideImageArgs),
    UnveilImage(unveil_image::UnveilImageArgs),
}
