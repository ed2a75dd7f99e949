use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RejpegError {
    /// Represents a header template without a baseline Start-Of-Frame (`FF C0`) marker
    #[error("SOF0 marker not found in header")]
    MarkerNotFound,

    /// Represents a header that ends before the height/width fields behind the SOF0 marker
    #[error("Header is too short: {required} bytes required to reach the frame size fields, but only {actual} available")]
    HeaderTooShort { required: usize, actual: usize },

    /// Represents a bitstream line that is not valid hex for the selected encoding
    #[error("Bitstream line {line} could not be decoded: {reason}")]
    DecodeError { line: usize, reason: String },

    /// Represents an image size that does not fit into the 16 bit frame header fields
    #[error("Invalid dimensions {width}x{height}, both must be within 1..=65535")]
    InvalidDimensions { width: u32, height: u32 },

    /// Represents a size argument that is not formatted as `WIDTHxHEIGHT`
    #[error("Invalid size format '{0}', expected WIDTHxHEIGHT, e.g. 1920x1080")]
    InvalidSizeFormat(String),

    /// Represents an unknown bitstream encoding name
    #[error("Unknown bitstream encoding '{0}', expected one of hex-bytes, hex-words, raw")]
    InvalidEncoding(String),

    /// Represents a hex bitstream that is not valid UTF-8 text
    #[error("Invalid text data found inside the bitstream")]
    InvalidTextData(#[from] Utf8Error),

    /// Represents a header folder without any `.bin` template
    #[error("No header templates found in {0}")]
    NoHeaderTemplates(PathBuf),

    /// Represents a header selection that matches no template, by number or by name
    #[error("Header not found: {0}")]
    HeaderNotFound(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a rebuilt container that the image codec refused to decode
    #[error("Image decoding error: {0}")]
    ImageDecodingError(String),

    /// Represents a failure when re-encoding the rebuilt image
    #[error("Image encoding error: {0}")]
    ImageEncodingError(String),

    #[error("No header set")]
    HeaderNotSet,

    #[error("No bitstream set")]
    BitstreamNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
