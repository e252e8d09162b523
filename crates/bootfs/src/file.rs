//! Payload access.

use crate::reader::Entry;

/// Zero-copy view of one payload.
#[derive(Debug, Clone, Copy)]
pub struct File<'a> {
    entry: Entry<'a>,
    data: &'a [u8],
}

impl<'a> File<'a> {
    pub(crate) fn new(entry: Entry<'a>, data: &'a [u8]) -> Self {
        Self { entry, data }
    }

    /// Directory record this file was opened from.
    #[inline]
    pub fn entry(&self) -> &Entry<'a> {
        &self.entry
    }

    /// Absolute payload offset within the image.
    #[inline]
    pub fn offset(&self) -> usize {
        self.entry.payload_offset as usize
    }

    /// Payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for zero-length payloads.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole payload.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Copy up to `out.len()` bytes starting at `offset` into `out`.
    ///
    /// Returns the number of bytes copied. Reads that start at or past the end
    /// return 0; reads that run past the end are clamped.
    pub fn read_at(&self, out: &mut [u8], offset: usize) -> usize {
        if offset >= self.data.len() {
            return 0;
        }
        let n = out.len().min(self.data.len() - offset);
        out[..n].copy_from_slice(&self.data[offset..offset + n]);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Image;
    use crate::format::{BOOTFS_MAGIC, HEADER_SIZE, entry_stride};

    const PAYLOAD: &[u8; 10] = b"0123456789";

    fn ten_byte_image() -> Vec<u8> {
        let dirlen = entry_stride(1);
        let mut v = Vec::new();
        v.extend_from_slice(&BOOTFS_MAGIC.to_le_bytes());
        v.extend_from_slice(&(dirlen as u32).to_le_bytes());
        v.extend_from_slice(&[0; 8]);
        v.extend_from_slice(&1u32.to_le_bytes());
        v.extend_from_slice(&(PAYLOAD.len() as u32).to_le_bytes());
        v.extend_from_slice(&((HEADER_SIZE + dirlen) as u32).to_le_bytes());
        v.extend_from_slice(b"f\0\0\0");
        v.extend_from_slice(PAYLOAD);
        v
    }

    #[test]
    fn read_inside_payload() {
        let bytes = ten_byte_image();
        let file = Image::parse(&bytes).unwrap().open("f").unwrap();
        assert_eq!(file.len(), 10);
        assert_eq!(file.offset(), 32);

        let mut out = [0u8; 4];
        assert_eq!(file.read_at(&mut out, 3), 4);
        assert_eq!(&out, b"3456");
    }

    #[test]
    fn read_is_clamped_at_end() {
        let bytes = ten_byte_image();
        let file = Image::parse(&bytes).unwrap().open("f").unwrap();

        let mut out = [0xffu8; 10];
        assert_eq!(file.read_at(&mut out, 8), 2);
        assert_eq!(&out[..2], b"89");
        assert!(out[2..].iter().all(|&b| b == 0xff));

        let mut out = [0u8; 5];
        assert_eq!(file.read_at(&mut out, 10), 0);
        assert_eq!(file.read_at(&mut out, 12), 0);
        assert_eq!(file.read_at(&mut out, usize::MAX), 0);
    }

    #[test]
    fn empty_output_reads_nothing() {
        let bytes = ten_byte_image();
        let file = Image::parse(&bytes).unwrap().open("f").unwrap();
        assert_eq!(file.read_at(&mut [], 0), 0);
    }
}
