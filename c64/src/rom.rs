//! ROM image loading. The binaries themselves (BASIC, CHARACTER, KERNAL)
//! are never embedded in this crate; callers load them from disk (the CLI)
//! or from test fixtures and hand over fixed-size byte arrays.

use std::fs;
use std::path::Path;

/// The three mask ROM images a [`crate::C64`] is built from.
#[derive(Debug, Clone)]
pub struct RomSet {
    pub basic: [u8; 0x2000],
    pub char_rom: [u8; 0x1000],
    pub kernal: [u8; 0x2000],
}

/// Host-side failure loading a ROM image; never raised once a [`crate::C64`]
/// is constructed and running.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to read ROM image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("ROM image {path} is {actual} bytes, expected exactly {expected}")]
    WrongSize {
        path: String,
        expected: usize,
        actual: usize,
    },
}

fn load_exact<const N: usize>(path: &Path) -> Result<[u8; N], ShellError> {
    let bytes = fs::read(path).map_err(|source| ShellError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if bytes.len() != N {
        return Err(ShellError::WrongSize {
            path: path.display().to_string(),
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

impl RomSet {
    /// Loads the three ROM images from disk, each validated against its
    /// fixed mask-ROM size.
    pub fn load(basic: &Path, char_rom: &Path, kernal: &Path) -> Result<Self, ShellError> {
        Ok(Self {
            basic: load_exact(basic)?,
            char_rom: load_exact(char_rom)?,
            kernal: load_exact(kernal)?,
        })
    }
}
