use std::io::Write;

use anyhow::Result;
use bootfs::Image;

/// One `name, size, offset` line per directory entry.
pub fn list_entries<W: Write>(image: &Image<'_>, out: &mut W) -> Result<()> {
    for entry in image.entries() {
        let entry = entry?;
        writeln!(
            out,
            "File: {}, Size: {} bytes, Offset: {}",
            entry.display_name(),
            entry.payload_length,
            entry.payload_offset
        )?;
    }
    Ok(())
}
