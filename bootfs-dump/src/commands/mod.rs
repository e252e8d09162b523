pub mod cat;
pub mod dump;
pub mod info;
pub mod list;

use bootfs::{BootfsError, Entry, Image};

/// Exact lookup first; images written by the packing tool store names with a
/// trailing NUL, so fall back to that convention.
pub fn resolve<'a>(image: &Image<'a>, name: &str) -> bootfs::Result<Entry<'a>> {
    match image.find(name) {
        Err(BootfsError::NotFound) => image.find_cstr(name),
        res => res,
    }
}


#[cfg(test)]
pub(crate) mod fixture {
    use bootfs::format::{DIRENT_FIXED_SIZE, HEADER_SIZE};
    use bootfs::{BOOTFS_MAGIC, entry_stride};

    /// Image with payloads packed right after the directory.
    pub(crate) fn image(files: &[(&str, &[u8])]) -> Vec<u8> {
        let dirlen: usize = files.iter().map(|(n, _)| entry_stride(n.len())).sum();
        let mut offset = HEADER_SIZE + dirlen;

        let mut out = Vec::new();
        for v in [BOOTFS_MAGIC, dirlen as u32, 0, 0] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        for (name, data) in files {
            for v in [name.len(), data.len(), offset] {
                out.extend_from_slice(&(v as u32).to_le_bytes());
            }
            out.extend_from_slice(name.as_bytes());
            out.resize(out.len() + entry_stride(name.len()) - DIRENT_FIXED_SIZE - name.len(), 0);
            offset += data.len();
        }
        for (_, data) in files {
            out.extend_from_slice(data);
        }
        out
    }
}
