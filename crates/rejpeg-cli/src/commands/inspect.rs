use std::fs;
use std::path::PathBuf;

use clap::Args;
use rejpeg_core::{find_sof0, read_dimensions, Marker, RejpegError};

use crate::CliResult;

/// Shows where the frame size of a header template is stored and what it says
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Header template file
    #[arg(long, value_name = "header file", required = true)]
    pub header: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let header = fs::read(&self.header).map_err(|source| RejpegError::ReadError { source })?;

        println!("{}: {} bytes", self.header.display(), header.len());
        println!(
            "  starts with SOI: {}",
            header.starts_with(&Marker::SOI.to_bytes())
        );
        println!("  SOS included:    {}", Marker::SOS.find_in(&header).is_some());

        let offset = find_sof0(&header).ok_or(RejpegError::MarkerNotFound)?;
        let (width, height) = read_dimensions(&header)?;
        println!("  SOF0 offset:     {}", offset);
        println!("  frame size:      {}x{}", width, height);

        Ok(())
    }
}
