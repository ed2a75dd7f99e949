//! The handful of JPEG markers (ITU T.81 Table B.1) needed to rebuild a container.

/// Every marker is introduced by this byte.
pub const MARKER_PREFIX: u8 = 0xFF;

/// JPEG marker types that the reconstruction touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Marker {
    /// Start of Image.
    SOI,
    /// Start of Frame, baseline DCT. Carries precision, height, width and components.
    SOF0,
    /// Start of Scan.
    SOS,
    /// End of Image.
    EOI,
}

impl Marker {
    /// Size of a marker on the wire.
    pub const SIZE: usize = 2;

    pub fn to_u8(self) -> u8 {
        match self {
            Marker::SOI => 0xD8,
            Marker::SOF0 => 0xC0,
            Marker::SOS => 0xDA,
            Marker::EOI => 0xD9,
        }
    }

    /// The two bytes as they appear in a JPEG stream, e.g. `[0xFF, 0xD9]` for EOI.
    pub fn to_bytes(self) -> [u8; Marker::SIZE] {
        [MARKER_PREFIX, self.to_u8()]
    }

    /// Offset of the first occurrence of this marker in `bytes`.
    ///
    /// This is a plain byte pair search. Stuffed bytes or segment boundaries are not
    /// considered, so the first matching pair wins.
    pub fn find_in(self, bytes: &[u8]) -> Option<usize> {
        let needle = self.to_bytes();
        bytes.windows(Marker::SIZE).position(|pair| pair == needle)
    }

    /// True when `bytes` ends with exactly this marker.
    pub fn terminates(self, bytes: &[u8]) -> bool {
        bytes.ends_with(&self.to_bytes())
    }
}
