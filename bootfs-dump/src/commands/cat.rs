use std::io::Write;

use anyhow::{Context, Result};
use bootfs::Image;
use tracing::debug;

use super::resolve;

const CHUNK: usize = 64 << 10;

/// Copy one payload to `out` through bounded reads.
pub fn cat_file<W: Write>(image: &Image<'_>, name: &str, out: &mut W) -> Result<u64> {
    let file = resolve(image, name)
        .and_then(|entry| image.file(entry))
        .with_context(|| format!("open {name:?}"))?;

    let mut buf = vec![0u8; CHUNK.min(file.len().max(1))];
    let mut offset = 0usize;
    loop {
        let n = file.read_at(&mut buf, offset);
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).context("write payload")?;
        offset += n;
    }

    debug!(name, bytes = offset, "cat finished");
    Ok(offset as u64)
}
