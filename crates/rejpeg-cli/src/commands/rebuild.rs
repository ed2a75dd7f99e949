use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args};
use rejpeg_core::{
    api::rebuild, BitstreamEncoding, Dimensions, HeaderCatalog, HeaderSelection, RejpegError,
};

use crate::CliResult;

/// Rebuilds a JPEG image from a header template and a bitstream dump
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("header_source").required(true).args(["header", "headers"])))]
#[command(group(ArgGroup::new("template_choice").multiple(true).args(["select", "size"])))]
pub struct RebuildArgs {
    /// Header template file, used as is unless a size is given
    #[arg(long, value_name = "header file")]
    pub header: Option<PathBuf>,

    /// Folder with header templates (*.bin) to select from, needs --select or --size
    #[arg(long, value_name = "header folder", requires = "template_choice")]
    pub headers: Option<PathBuf>,

    /// Template of the header folder, by number or file name. Without it the first template
    /// is patched to --size
    #[arg(long, value_name = "number or name", requires = "headers")]
    pub select: Option<HeaderSelection>,

    /// Bitstream dump written by the encoder
    #[arg(
        short = 'b',
        long = "bitstream",
        value_name = "bitstream file",
        required = true
    )]
    pub bitstream: PathBuf,

    /// How the bitstream dump is encoded: hex-bytes, hex-words or raw
    #[arg(short, long, value_name = "encoding", default_value = "hex-bytes")]
    pub encoding: BitstreamEncoding,

    /// Size of the encoded image, the header is patched when it differs
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<Dimensions>,

    /// Re-encode the rebuilt image with this JPEG quality
    #[arg(short, long, value_name = "1-100", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Final image will be stored as file, defaults to reconstructed_<header>.jpg next to the
    /// bitstream
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,
}

impl RebuildArgs {
    pub fn run(self) -> CliResult<()> {
        let api = rebuild::prepare().with_bitstream_file(&self.bitstream, self.encoding);

        let (api, header_name) = match (self.header, self.headers) {
            (Some(header), _) => {
                let name = stem_of(&header);
                (api.with_header_file(&header), name)
            }
            (None, Some(dir)) => {
                let catalog = HeaderCatalog::open(&dir)?;
                let selection = self
                    .select
                    .or(self.size.map(HeaderSelection::Custom))
                    .ok_or(RejpegError::HeaderNotSet)?;
                let selected = catalog.select(&selection)?;
                log::info!("Using header: {}", selected.name);
                let name = selected.stem().to_owned();
                (api.with_selected_header(selected), name)
            }
            (None, None) => return Err(RejpegError::HeaderNotSet),
        };

        let api = match self.size {
            Some(size) => api.with_target_size(size),
            None => api,
        };
        let api = match self.quality {
            Some(quality) => api.with_quality(quality),
            None => api,
        };

        let output = self
            .output
            .unwrap_or_else(|| default_output(&self.bitstream, &header_name));
        api.into_output_file(&output).execute()?;
        println!("JPEG image saved at {}", output.display());

        Ok(())
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("header")
        .to_owned()
}

fn default_output(bitstream: &Path, header_name: &str) -> PathBuf {
    let file_name = format!("reconstructed_{}.jpg", header_name);
    match bitstream.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_next_to_the_bitstream() {
        assert_eq!(
            default_output(Path::new("sim/bitstream_output.txt"), "96x96"),
            PathBuf::from("sim/reconstructed_96x96.jpg")
        );
        assert_eq!(
            default_output(Path::new("bitstream_output.txt"), "custom_8x8"),
            PathBuf::from("reconstructed_custom_8x8.jpg")
        );
        assert_eq!(stem_of(Path::new("Headers/96x96.bin")), "96x96");
    }
}
