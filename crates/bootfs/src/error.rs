//! Error type shared by every BootFS operation.

use thiserror::Error;

/// BootFS error types
#[derive(Error, Debug)]
pub enum BootfsError {
    /// Buffer is shorter than the fixed header
    #[error("truncated image: {len} bytes, header needs {needed}", needed = crate::format::HEADER_SIZE)]
    TruncatedImage {
        /// Length of the buffer that was handed in
        len: usize,
    },

    /// Header magic does not identify a BootFS image
    #[error("bad magic: {found:#010x}")]
    BadMagic {
        /// Magic value found at offset 0
        found: u32,
    },

    /// A directory entry overruns the directory region or the buffer
    #[error("corrupt directory entry at offset {offset}")]
    CorruptDirectory {
        /// Absolute offset of the offending entry
        offset: usize,
    },

    /// No entry carries the requested name
    #[error("file not found")]
    NotFound,

    /// An entry's payload span lies outside the image
    #[error("payload {offset}+{length} out of bounds for image of {image_len} bytes")]
    PayloadOutOfBounds {
        /// Absolute payload offset recorded in the entry
        offset: u32,
        /// Payload length recorded in the entry
        length: u32,
        /// Total image length
        image_len: usize,
    },

    /// IO error from the image loader
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootfsError {
    /// True for the normal negative lookup result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BootfsError::NotFound)
    }
}

/// Result type alias for BootFS operations
pub type Result<T> = std::result::Result<T, BootfsError>;
