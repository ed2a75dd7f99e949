use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, ImageOutputFormat};

use crate::{
    bitstream::BitstreamEncoding, catalog::SelectedHeader, container::assemble,
    header::Dimensions, RejpegError, Result,
};

pub fn prepare() -> RebuildApi {
    RebuildApi::default()
}

#[derive(Debug)]
enum Input {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl Input {
    fn load(self) -> Result<Vec<u8>> {
        match self {
            Input::File(path) => fs::read(path).map_err(|source| RejpegError::ReadError { source }),
            Input::Bytes(bytes) => Ok(bytes),
        }
    }
}

#[derive(Default, Debug)]
pub struct RebuildApi {
    header: Option<Input>,
    header_target: Option<Dimensions>,
    bitstream: Option<(Input, BitstreamEncoding)>,
    target: Option<Dimensions>,
    quality: Option<u8>,
    output: Option<PathBuf>,
}

impl RebuildApi {
    /// Use the header template stored in this file
    pub fn with_header_file(mut self, header: impl AsRef<Path>) -> Self {
        self.header = Some(Input::File(header.as_ref().to_path_buf()));
        self
    }

    /// Use this header template as is
    pub fn with_header_bytes(mut self, header: Vec<u8>) -> Self {
        self.header = Some(Input::Bytes(header));
        self
    }

    /// Use a header picked from a catalog, a custom selection also brings its target size
    pub fn with_selected_header(mut self, header: SelectedHeader) -> Self {
        self.header_target = header.target;
        self.header = Some(Input::Bytes(header.bytes));
        self
    }

    /// This is the bitstream dump produced by the encoder
    pub fn with_bitstream_file(
        mut self,
        bitstream: impl AsRef<Path>,
        encoding: BitstreamEncoding,
    ) -> Self {
        self.bitstream = Some((Input::File(bitstream.as_ref().to_path_buf()), encoding));
        self
    }

    /// Use this already loaded bitstream dump
    pub fn with_bitstream_bytes(mut self, bitstream: Vec<u8>, encoding: BitstreamEncoding) -> Self {
        self.bitstream = Some((Input::Bytes(bitstream), encoding));
        self
    }

    /// Patch the header to this size, takes precedence over the size of a custom selection
    pub fn with_target_size(mut self, size: Dimensions) -> Self {
        self.target = Some(size);
        self
    }

    /// Decode the rebuilt image and save it re-encoded with this JPEG quality (1-100)
    /// instead of writing the container byte for byte
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    /// This is the file where the rebuilt image will be saved to
    pub fn into_output_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Rebuild the image in memory
    pub fn build(self) -> Result<Vec<u8>> {
        let Some(header) = self.header else {
            return Err(RejpegError::HeaderNotSet);
        };
        let Some((bitstream, encoding)) = self.bitstream else {
            return Err(RejpegError::BitstreamNotSet);
        };

        let header = header.load()?;
        let bitstream = bitstream.load()?;
        let source = encoding.source(&bitstream)?;
        let container = assemble(header, &source, self.target.or(self.header_target))?;

        match self.quality {
            Some(quality) => reencode(&container, quality),
            None => Ok(container),
        }
    }

    /// Execute the rebuild and blocks until the image is written
    pub fn execute(mut self) -> Result<()> {
        let Some(output) = self.output.take() else {
            return Err(RejpegError::TargetNotSet);
        };

        let image = self.build()?;
        fs::write(&output, &image).map_err(|source| RejpegError::WriteError { source })?;
        log::debug!("{} bytes written to {}", image.len(), output.display());

        Ok(())
    }
}

fn reencode(container: &[u8], quality: u8) -> Result<Vec<u8>> {
    let image = image::load_from_memory_with_format(container, ImageFormat::Jpeg)
        .map_err(|e| RejpegError::ImageDecodingError(e.to_string()))?;

    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, ImageOutputFormat::Jpeg(quality.clamp(1, 100)))
        .map_err(|e| RejpegError::ImageEncodingError(e.to_string()))?;

    Ok(encoded.into_inner())
}
