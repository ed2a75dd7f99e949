//! Assembly of a complete JPEG container from a header and encoded scan data.

use crate::bitstream::BitstreamSource;
use crate::header::{self, Dimensions};
use crate::marker::Marker;
use crate::result::Result;

/// Builds `header ++ scan data ++ EOI`.
///
/// With a `target` size the frame size in the header is compared to it and patched when it
/// differs. Without a target the header is used exactly as given. Either the complete
/// container is returned or an error, never a partial buffer.
pub fn assemble(
    header: Vec<u8>,
    bitstream: &BitstreamSource,
    target: Option<Dimensions>,
) -> Result<Vec<u8>> {
    let header = match target {
        Some(target) => {
            let embedded = header::read_dimensions(&header)?;
            if embedded == target.as_tuple() {
                log::debug!("header already describes {}, using it as is", target);
                header
            } else {
                log::debug!(
                    "header describes {}x{}, patching to {}",
                    embedded.0,
                    embedded.1,
                    target
                );
                header::patch_to(header, target)?
            }
        }
        None => header,
    };

    let scan = bitstream.decode()?;
    log::debug!(
        "decoded {} bytes of {} bitstream",
        scan.len(),
        bitstream.encoding()
    );

    let mut container = header;
    container.reserve(scan.len() + Marker::SIZE);
    container.extend_from_slice(&scan);
    terminate(&mut container);

    Ok(container)
}

/// Appends the EOI marker unless `buffer` already ends with it.
///
/// This only looks at the last two bytes, the data in front is not inspected.
pub fn terminate(buffer: &mut Vec<u8>) {
    if Marker::EOI.terminates(buffer.as_slice()) {
        log::debug!("container already ends with EOI");
    } else {
        log::debug!("appending EOI marker");
        buffer.extend_from_slice(&Marker::EOI.to_bytes());
    }
}
