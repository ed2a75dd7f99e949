use clap::Parser;
use rejpeg_core::RejpegError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, RejpegError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Rebuild(args) => args.run(),
        Commands::Headers(args) => args.run(),
        Commands::Inspect(args) => args.run(),
        Commands::Patch(args) => args.run(),
    }
}
