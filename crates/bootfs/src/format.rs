//! On-disk layout of a BootFS image.
//!
//! ```text
//!     | magic | dirlen | reserved | reserved2 |   16 bytes
//!     |---------------------------------------|
//!     | namelen | length | offset | name ...  |   12 + align_up(namelen, 4)
//!     | ...                                   |
//!     |---------------------------------------|
//!     | payloads, at absolute offsets         |
//! ```
//!
//! All integers are little-endian u32.

use crate::error::{BootfsError, Result};

/// Magic value at offset 0 of every image.
pub const BOOTFS_MAGIC: u32 = 0xA56D_3FF9;

/// Block size the packer aligns the data region and every payload to.
pub const BOOTFS_BLOCK: usize = 4096;

/// Longest name the packer emits. Not enforced when reading.
pub const NAME_MAX: usize = 256;

/// Directory entries start on this boundary.
pub const DIRENT_ALIGN: usize = 4;

/// Size of the fixed header.
pub const HEADER_SIZE: usize = 16;

/// Size of the fixed part of a directory entry (namelen, length, offset).
pub const DIRENT_FIXED_SIZE: usize = 12;

/// Rounds `value` up to the next multiple of `align`, which must be a power of two.
#[inline]
pub const fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

/// Total size of a directory entry whose name is `name_len` bytes long.
#[inline]
pub const fn entry_stride(name_len: usize) -> usize {
    DIRENT_FIXED_SIZE + align_up(name_len, DIRENT_ALIGN)
}

#[inline]
pub(crate) fn read_u32_le(buf: &[u8], off: usize) -> Option<u32> {
    let end = off.checked_add(4)?;
    let s = buf.get(off..end)?;
    Some(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

/// Fixed-size image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Always [`BOOTFS_MAGIC`] once parsed.
    pub magic: u32,
    /// Byte length of the directory that follows the header.
    pub directory_length: u32,
    /// Unused; kept as found.
    pub reserved: u32,
    /// Unused; kept as found.
    pub reserved2: u32,
}

impl Header {
    /// Parse and check the header at the start of `buf`.
    ///
    /// Only the magic is validated. Directory bounds are checked lazily by the
    /// entry iterator.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(BootfsError::TruncatedImage { len: buf.len() });
        }

        let field = |off| read_u32_le(buf, off).ok_or(BootfsError::TruncatedImage { len: buf.len() });

        let magic = field(0)?;
        if magic != BOOTFS_MAGIC {
            return Err(BootfsError::BadMagic { found: magic });
        }

        Ok(Self {
            magic,
            directory_length: field(4)?,
            reserved: field(8)?,
            reserved2: field(12)?,
        })
    }

    /// Absolute offset one past the last directory byte.
    #[inline]
    pub fn directory_end(&self) -> usize {
        HEADER_SIZE.saturating_add(self.directory_length as usize)
    }
}
