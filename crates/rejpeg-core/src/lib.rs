//! # Rejpeg Core API
//!
//! Rebuilds a viewable JPEG file from the pieces a hardware encoder simulation leaves behind:
//! a captured header template and a dump of the raw entropy coded scan data.
//!
//! - [`header`] locates the baseline SOF0 segment of a template and patches its frame size
//! - [`bitstream`] decodes hex text or binary dumps into scan bytes
//! - [`container`] glues header and scan data together and terminates them with EOI
//! - [`catalog`] and [`api::rebuild`] take care of files for the command line tool
//!
//! # Usage Examples
//!
//! ## Assemble a container in memory
//!
//! ```rust
//! use rejpeg_core::{assemble, BitstreamSource};
//!
//! let template = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x00, 0x00, 0x00, 0x03];
//! let jpeg = assemble(template, &BitstreamSource::HexBytes("A1B2\n"), Some("96x64".parse()?))?;
//!
//! assert_eq!(rejpeg_core::read_dimensions(&jpeg)?, (96, 64));
//! assert!(jpeg.ends_with(&[0xA1, 0xB2, 0xFF, 0xD9]));
//! # Ok::<(), rejpeg_core::RejpegError>(())
//! ```
//!
//! ## Rebuild an image from files
//!
//! ```rust,no_run
//! use rejpeg_core::BitstreamEncoding;
//!
//! rejpeg_core::api::rebuild::prepare()
//!     .with_header_file("Headers/96x96.bin")
//!     .with_bitstream_file("bitstream_output.txt", BitstreamEncoding::HexBytes)
//!     .with_target_size("1920x1080".parse().expect("valid size"))
//!     .into_output_file("output_images/reconstructed.jpg")
//!     .execute()
//!     .expect("Failed to rebuild image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bitstream;
pub mod catalog;
pub mod container;
pub mod error;
pub mod header;
pub mod marker;
pub mod result;

pub use crate::bitstream::{BitstreamEncoding, BitstreamSource};
pub use crate::catalog::{HeaderCatalog, HeaderSelection, SelectedHeader};
pub use crate::container::{assemble, terminate};
pub use crate::error::RejpegError;
pub use crate::header::{find_sof0, patch, patch_to, read_dimensions, Dimensions};
pub use crate::marker::Marker;
pub use crate::result::Result;
