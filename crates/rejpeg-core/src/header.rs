//! Frame size patching of JPEG header templates.
//!
//! A header template is everything of a JPEG file up to the entropy coded scan data. It is
//! captured once and reused for many images, so the only thing that differs from one image to
//! the next is the frame size stored in the baseline Start-Of-Frame segment:
//!
//! ```text
//! offset  0..2   FF C0       SOF0 marker
//!         2..4   Lf          segment length, untouched
//!         4      P           sample precision, untouched
//!         5..7   Y           number of lines (height), big endian
//!         7..9   X           samples per line (width), big endian
//! ```

use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};

use crate::error::RejpegError;
use crate::marker::Marker;
use crate::result::Result;

/// Offset of the height field relative to the SOF0 marker.
pub const HEIGHT_OFFSET: usize = 5;
/// Offset of the width field relative to the SOF0 marker.
pub const WIDTH_OFFSET: usize = 7;
/// Bytes from the SOF0 marker up to and including the width field.
pub const FRAME_FIELDS_LEN: usize = 9;

/// Image size as stored in a frame header. Both sides are within `1..=65535`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(RejpegError::InvalidDimensions { width, height }),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)` in the order `read_dimensions` returns them.
    pub fn as_tuple(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = RejpegError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1920x1080`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RejpegError::InvalidSizeFormat(s.to_owned());
        let lower = s.trim().to_lowercase();
        let (width, height) = lower.split_once('x').ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        Dimensions::new(width, height)
    }
}

/// Offset of the first SOF0 marker in `header`.
pub fn find_sof0(header: &[u8]) -> Option<usize> {
    Marker::SOF0.find_in(header)
}

/// Locates the SOF0 marker and makes sure the frame size fields behind it are present.
fn locate_frame_fields(header: &[u8]) -> Result<usize> {
    let offset = find_sof0(header).ok_or(RejpegError::MarkerNotFound)?;
    let required = offset + FRAME_FIELDS_LEN;
    if header.len() < required {
        return Err(RejpegError::HeaderTooShort {
            required,
            actual: header.len(),
        });
    }
    log::debug!("SOF0 marker found at offset {}", offset);

    Ok(offset)
}

/// Reads the frame size as `(width, height)` from the first SOF0 segment.
///
/// The values are returned as stored, a template may well carry `0x0`.
pub fn read_dimensions(header: &[u8]) -> Result<(u16, u16)> {
    let offset = locate_frame_fields(header)?;
    let height = BigEndian::read_u16(&header[offset + HEIGHT_OFFSET..offset + WIDTH_OFFSET]);
    let width = BigEndian::read_u16(&header[offset + WIDTH_OFFSET..offset + FRAME_FIELDS_LEN]);

    Ok((width, height))
}

/// Overwrites the height and width of the first SOF0 segment in `template`.
///
/// The template is taken by value and handed back patched, no other byte is touched. Only the
/// first SOF0 marker is considered; hierarchical or progressive headers are not supported.
pub fn patch(mut template: Vec<u8>, width: u16, height: u16) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(RejpegError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    let offset = locate_frame_fields(&template)?;

    BigEndian::write_u16(
        &mut template[offset + HEIGHT_OFFSET..offset + WIDTH_OFFSET],
        height,
    );
    BigEndian::write_u16(
        &mut template[offset + WIDTH_OFFSET..offset + FRAME_FIELDS_LEN],
        width,
    );
    log::debug!("patched header frame size to {}x{}", width, height);

    Ok(template)
}

/// Same as [`patch`] for an already validated size.
pub fn patch_to(template: Vec<u8>, dimensions: Dimensions) -> Result<Vec<u8>> {
    patch(template, dimensions.width(), dimensions.height())
}
