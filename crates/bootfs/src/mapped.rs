//! Memory-mapped image loader.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::{Image, Result};

/// A BootFS image file mapped read-only into memory.
///
/// Owns the mapping; every [`Image`] obtained from it borrows from here.
pub struct MappedImage {
    // None for empty files, which cannot be mapped on every platform.
    map: Option<Mmap>,
}

impl MappedImage {
    /// Open and map the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let map = if len == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only and the image is treated as
            // immutable for as long as it is mapped.
            Some(unsafe { Mmap::map(&file)? })
        };

        debug!(path = %path.display(), len, "mapped bootfs image");
        Ok(Self { map })
    }

    /// Mapped bytes; empty for an empty file.
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    /// Parse the mapped bytes.
    pub fn image(&self) -> Result<Image<'_>> {
        Image::parse(self.as_bytes())
    }
}
