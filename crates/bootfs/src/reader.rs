//! Directory traversal and lookup.

use core::iter::FusedIterator;

use tracing::{debug, warn};

use crate::error::{BootfsError, Result};
use crate::file::File;
use crate::format::{DIRENT_FIXED_SIZE, HEADER_SIZE, Header, entry_stride, read_u32_le};

/// Parsed view over an in-memory BootFS image.
///
/// The image borrows the buffer; nothing is copied and no state is kept
/// between calls, so an `Image` can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    buf: &'a [u8],
    header: Header,
}

/// One directory record, borrowed from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Absolute offset of this record within the image.
    pub position: usize,
    /// Length of the payload in bytes.
    pub payload_length: u32,
    /// Absolute offset of the payload from the start of the image.
    pub payload_offset: u32,
    name: &'a [u8],
}

impl<'a> Entry<'a> {
    /// Raw name bytes, exactly `name_length` long.
    #[inline]
    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// Length of the name in bytes, as recorded in the directory.
    #[inline]
    pub fn name_length(&self) -> usize {
        self.name.len()
    }

    /// Size of this record in the directory, padding included.
    #[inline]
    pub fn stride(&self) -> usize {
        entry_stride(self.name.len())
    }

    /// Name for display: trailing NULs trimmed, invalid UTF-8 replaced.
    pub fn display_name(&self) -> String {
        let end = self
            .name
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |p| p + 1);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

/// Forward-only cursor over the directory. Yields a `Result` per entry and
/// stops for good after the first error.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    buf: &'a [u8],
    cursor: usize,
    end: usize,
}

impl Entries<'_> {
    fn corrupt(&mut self, offset: usize) -> BootfsError {
        warn!(offset, end = self.end, "corrupt bootfs directory entry");
        self.cursor = self.end;
        BootfsError::CorruptDirectory { offset }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<Entry<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }

        let at = self.cursor;
        // Nothing may be read past the directory or past the buffer.
        let limit = self.end.min(self.buf.len());

        let fixed_end = match at.checked_add(DIRENT_FIXED_SIZE) {
            Some(e) if e <= limit => e,
            _ => return Some(Err(self.corrupt(at))),
        };

        let (Some(name_len), Some(payload_length), Some(payload_offset)) = (
            read_u32_le(self.buf, at),
            read_u32_le(self.buf, at + 4),
            read_u32_le(self.buf, at + 8),
        ) else {
            return Some(Err(self.corrupt(at)));
        };
        let name_len = name_len as usize;

        let name = match fixed_end.checked_add(name_len) {
            Some(name_end) if name_end <= limit => &self.buf[fixed_end..name_end],
            _ => return Some(Err(self.corrupt(at))),
        };

        self.cursor = at.saturating_add(entry_stride(name_len));

        Some(Ok(Entry {
            position: at,
            payload_length,
            payload_offset,
            name,
        }))
    }
}

impl<'a> FusedIterator for Entries<'a> {}

impl<'a> Image<'a> {
    /// Parse the header of `buf` and wrap it for traversal.
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        let header = Header::parse(buf)?;
        Ok(Self { buf, header })
    }

    /// The validated header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The whole image buffer.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// A fresh iterator over the directory, in packed order.
    pub fn entries(&self) -> Entries<'a> {
        Entries {
            buf: self.buf,
            cursor: HEADER_SIZE,
            end: self.header.directory_end(),
        }
    }

    /// First entry whose name equals `name` byte for byte.
    ///
    /// Duplicate names are allowed by the format; later ones are unreachable
    /// through this lookup.
    pub fn find(&self, name: impl AsRef<[u8]>) -> Result<Entry<'a>> {
        let name = name.as_ref();
        for entry in self.entries() {
            let entry = entry?;
            if entry.name == name {
                return Ok(entry);
            }
        }
        Err(BootfsError::NotFound)
    }

    /// Lookup for images whose packer stores names NUL-terminated and counts
    /// the NUL in `name_length`.
    pub fn find_cstr(&self, name: impl AsRef<[u8]>) -> Result<Entry<'a>> {
        let name = name.as_ref();
        for entry in self.entries() {
            let entry = entry?;
            if let Some((&0, head)) = entry.name.split_last() {
                if head == name {
                    return Ok(entry);
                }
            }
        }
        Err(BootfsError::NotFound)
    }

    /// Resolve `name` and return a view of its payload.
    pub fn open(&self, name: impl AsRef<[u8]>) -> Result<File<'a>> {
        let entry = self.find(name)?;
        self.file(entry)
    }

    /// Payload view for an entry already in hand.
    pub fn file(&self, entry: Entry<'a>) -> Result<File<'a>> {
        let start = entry.payload_offset as usize;
        let data = start
            .checked_add(entry.payload_length as usize)
            .and_then(|end| self.buf.get(start..end));

        let Some(data) = data else {
            warn!(
                offset = entry.payload_offset,
                length = entry.payload_length,
                image_len = self.buf.len(),
                "bootfs payload out of bounds"
            );
            return Err(BootfsError::PayloadOutOfBounds {
                offset: entry.payload_offset,
                length: entry.payload_length,
                image_len: self.buf.len(),
            });
        };

        debug!(
            name = %entry.display_name(),
            offset = entry.payload_offset,
            length = entry.payload_length,
            "bootfs open"
        );
        Ok(File::new(entry, data))
    }
}
