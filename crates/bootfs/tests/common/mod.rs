#![allow(dead_code)]

use bootfs::format::{BOOTFS_BLOCK, DIRENT_FIXED_SIZE, HEADER_SIZE};
use bootfs::{BOOTFS_MAGIC, align_up, entry_stride};
use bytes::{BufMut, BytesMut};

/// Builds images the way the packing tool lays them out: the data region
/// starts on a block boundary and every payload is padded to a full block.
#[derive(Default)]
pub struct ImageBuilder {
    files: Vec<(Vec<u8>, Vec<u8>)>,
    nul_terminate: bool,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store names with a trailing NUL counted in `name_length`.
    pub fn nul_terminated(mut self) -> Self {
        self.nul_terminate = true;
        self
    }

    pub fn file(mut self, name: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> Self {
        let mut name = name.as_ref().to_vec();
        if self.nul_terminate {
            name.push(0);
        }
        self.files.push((name, data.as_ref().to_vec()));
        self
    }

    pub fn directory_length(&self) -> usize {
        self.files.iter().map(|(n, _)| entry_stride(n.len())).sum()
    }

    /// Absolute payload offsets, in directory order.
    pub fn offsets(&self) -> Vec<usize> {
        let mut offset = align_up(HEADER_SIZE + self.directory_length(), BOOTFS_BLOCK);
        self.files
            .iter()
            .map(|(_, data)| {
                let at = offset;
                offset += align_up(data.len(), BOOTFS_BLOCK);
                at
            })
            .collect()
    }

    pub fn build(&self) -> Vec<u8> {
        let dirlen = self.directory_length();
        let offsets = self.offsets();
        let mut image = BytesMut::new();

        image.put_u32_le(BOOTFS_MAGIC);
        image.put_u32_le(dirlen as u32);
        image.put_u32_le(0);
        image.put_u32_le(0);

        for ((name, data), offset) in self.files.iter().zip(&offsets) {
            image.put_u32_le(name.len() as u32);
            image.put_u32_le(data.len() as u32);
            image.put_u32_le(*offset as u32);
            image.put_slice(name);
            image.put_bytes(0, entry_stride(name.len()) - DIRENT_FIXED_SIZE - name.len());
        }
        debug_assert_eq!(image.len(), HEADER_SIZE + dirlen);

        image.put_bytes(0, align_up(image.len(), BOOTFS_BLOCK) - image.len());
        for (_, data) in &self.files {
            image.put_slice(data);
            image.put_bytes(0, align_up(data.len(), BOOTFS_BLOCK) - data.len());
        }

        image.to_vec()
    }
}
