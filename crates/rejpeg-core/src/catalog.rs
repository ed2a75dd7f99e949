//! A folder of captured header templates (`*.bin`) to choose from.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::RejpegError;
use crate::header::Dimensions;
use crate::result::Result;

/// File extension of header templates.
pub const TEMPLATE_EXTENSION: &str = "bin";

/// Which template to use from a [`HeaderCatalog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderSelection {
    /// 1-based position in the sorted listing.
    Index(usize),
    /// Exact file name, e.g. `96x96.bin`.
    Name(String),
    /// The first template, to be patched to the given size.
    Custom(Dimensions),
}

impl FromStr for HeaderSelection {
    type Err = RejpegError;

    /// Digits select by number, anything else by file name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RejpegError::HeaderNotFound(s.to_owned()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            s.parse()
                .map(HeaderSelection::Index)
                .map_err(|_| RejpegError::HeaderNotFound(s.to_owned()))
        } else {
            Ok(HeaderSelection::Name(s.to_owned()))
        }
    }
}

impl fmt::Display for HeaderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSelection::Index(n) => write!(f, "#{}", n),
            HeaderSelection::Name(name) => f.write_str(name),
            HeaderSelection::Custom(d) => write!(f, "custom {}", d),
        }
    }
}

/// A header template picked from a catalog, loaded into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedHeader {
    pub name: String,
    pub bytes: Vec<u8>,
    /// Set for custom selections, the header still needs patching to this size.
    pub target: Option<Dimensions>,
}

impl SelectedHeader {
    /// The name without the `.bin` extension, e.g. `custom_96x64`.
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}

/// The header templates of one folder, sorted by file name.
#[derive(Debug)]
pub struct HeaderCatalog {
    dir: PathBuf,
    names: Vec<String>,
}

impl HeaderCatalog {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let mut names = Vec::new();

        for entry in fs::read_dir(&dir).map_err(|source| RejpegError::ReadError { source })? {
            let path = entry
                .map_err(|source| RejpegError::ReadError { source })?
                .path();
            if !path.is_file() || !is_template(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_owned());
            }
        }

        if names.is_empty() {
            return Err(RejpegError::NoHeaderTemplates(dir));
        }
        names.sort();
        log::debug!("found {} header templates in {}", names.len(), dir.display());

        Ok(Self { dir, names })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Loads the selected template.
    pub fn select(&self, selection: &HeaderSelection) -> Result<SelectedHeader> {
        let (name, target) = match selection {
            HeaderSelection::Index(n) => {
                let name = n
                    .checked_sub(1)
                    .and_then(|idx| self.names.get(idx))
                    .ok_or_else(|| RejpegError::HeaderNotFound(selection.to_string()))?;
                (name.clone(), None)
            }
            HeaderSelection::Name(name) => {
                if !self.names.contains(name) {
                    return Err(RejpegError::HeaderNotFound(name.clone()));
                }
                (name.clone(), None)
            }
            HeaderSelection::Custom(d) => (self.names[0].clone(), Some(*d)),
        };

        let bytes =
            fs::read(self.dir.join(&name)).map_err(|source| RejpegError::ReadError { source })?;
        log::debug!("using header template {} ({} bytes)", name, bytes.len());

        let name = match target {
            Some(d) => format!("custom_{}.{}", d, TEMPLATE_EXTENSION),
            None => name,
        };

        Ok(SelectedHeader {
            name,
            bytes,
            target,
        })
    }
}

fn is_template(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(TEMPLATE_EXTENSION))
        .unwrap_or(false)
}
