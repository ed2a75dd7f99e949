use std::path::PathBuf;

use clap::Args;
use rejpeg_core::{read_dimensions, HeaderCatalog, HeaderSelection};

use crate::CliResult;

/// Lists the header templates of a folder
#[derive(Args, Debug)]
pub struct HeadersArgs {
    /// Folder with header templates (*.bin)
    #[arg(short, long, value_name = "header folder", required = true)]
    pub dir: PathBuf,
}

impl HeadersArgs {
    pub fn run(self) -> CliResult<()> {
        let catalog = HeaderCatalog::open(&self.dir)?;

        println!("Available headers in {}:", catalog.dir().display());
        for n in 1..=catalog.names().len() {
            let header = catalog.select(&HeaderSelection::Index(n))?;
            match read_dimensions(&header.bytes) {
                Ok((width, height)) => println!("  {}. {} ({}x{})", n, header.name, width, height),
                Err(e) => println!("  {}. {} ({})", n, header.name, e),
            }
        }

        Ok(())
    }
}
