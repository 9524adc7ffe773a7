use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = Result<T, pixelveil_core::StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("parsed arguments: {args:?}");
    match args.command {
        Commands::HideText(cmd) => cmd.run(),
        Commands::UnveilText(cmd) => cmd.run(),
        Commands::HideImage(cmd) => cmd.run(),
        Commands::UnveilImage(cmd) => cmd.run(),
    }
}
