use std::fs;
use std::path::PathBuf;

use clap::Args;
use rejpeg_core::{patch_to, Dimensions, RejpegError};

use crate::CliResult;

/// Writes a copy of a header template patched to a new frame size
#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Header template file, used readonly
    #[arg(long, value_name = "header file", required = true)]
    pub header: PathBuf,

    /// New frame size
    #[arg(short, long, value_name = "WIDTHxHEIGHT", required = true)]
    pub size: Dimensions,

    /// Patched header will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output header file", required = true)]
    pub output: PathBuf,
}

impl PatchArgs {
    pub fn run(self) -> CliResult<()> {
        let template =
            fs::read(&self.header).map_err(|source| RejpegError::ReadError { source })?;
        let patched = patch_to(template, self.size)?;

        fs::write(&self.output, patched).map_err(|source| RejpegError::WriteError { source })?;
        println!("Patched header for {} saved at {}", self.size, self.output.display());

        Ok(())
    }
}
