//! Reader for BootFS images
//!
//! A BootFS image is a flat, read-only archive of named blobs: a 16-byte
//! header, a packed directory, then the payloads. This crate provides
//! zero-copy, bounds-checked views over an image held in memory.

#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod format;
#[cfg(feature = "mmap")]
pub mod mapped;
pub mod reader;

pub use error::{BootfsError, Result};
pub use file::File;
pub use format::{BOOTFS_MAGIC, Header, align_up, entry_stride};
#[cfg(feature = "mmap")]
pub use mapped::MappedImage;
pub use reader::{Entries, Entry, Image};
