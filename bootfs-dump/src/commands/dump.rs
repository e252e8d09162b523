use std::io::Write;

use anyhow::{Context, Result};
use bootfs::{Entry, Image};
use tracing::debug;

use super::resolve;
use crate::hexdump::hexdump;

/// Header summary followed by every entry (or only `only`) and its payload.
pub fn dump_image<W: Write>(image: &Image<'_>, only: Option<&str>, out: &mut W) -> Result<()> {
    let header = image.header();
    writeln!(out, "BootFS Image:")?;
    writeln!(out, "Magic: {:#010x}", header.magic)?;
    writeln!(out, "Directory Length: {} bytes", header.directory_length)?;
    writeln!(out, "Files:")?;

    let mut dumped = 0usize;
    if let Some(name) = only {
        let entry = resolve(image, name).with_context(|| format!("find {name:?}"))?;
        dump_entry(image, entry, out)?;
        dumped += 1;
    } else {
        for entry in image.entries() {
            dump_entry(image, entry?, out)?;
            dumped += 1;
        }
    }

    debug!(dumped, "dump finished");
    Ok(())
}

fn dump_entry<W: Write>(image: &Image<'_>, entry: Entry<'_>, out: &mut W) -> Result<()> {
    let name = entry.display_name();
    let file = image
        .file(entry)
        .with_context(|| format!("open payload of {name}"))?;
    writeln!(
        out,
        "File: {name}, Size: {} bytes, Offset: {}",
        file.len(),
        file.offset()
    )?;
    hexdump(out, file.data())?;
    writeln!(out)?;
    Ok(())
}
