use clap::{Parser, Subcommand};

use crate::commands::*;

/// Rebuild viewable JPEG images from hardware encoder bitstream dumps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Rebuild(rebuild::RebuildArgs),
    Headers(headers::HeadersArgs),
    Inspect(inspect::InspectArgs),
    Patch(patch::PatchArgs),
}
