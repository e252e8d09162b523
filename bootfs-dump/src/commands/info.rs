use std::io::Write;

use anyhow::Result;
use bootfs::Image;

pub fn print_info<W: Write>(image: &Image<'_>, out: &mut W) -> Result<()> {
    let header = image.header();
    let mut entries = 0usize;
    for entry in image.entries() {
        entry?;
        entries += 1;
    }

    writeln!(out, "Magic: {:#010x}", header.magic)?;
    writeln!(out, "Directory Length: {} bytes", header.directory_length)?;
    writeln!(out, "Reserved: {:#010x} {:#010x}", header.reserved, header.reserved2)?;
    writeln!(out, "Image Size: {} bytes", image.as_bytes().len())?;
    writeln!(out, "Entries: {entries}")?;
    Ok(())
}
