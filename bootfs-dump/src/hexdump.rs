use std::io::{self, Write};

const BYTES_PER_LINE: usize = 16;

/// Classic `offset  hex bytes  |ascii|` rendering, 16 bytes per line.
pub fn hexdump<W: Write>(out: &mut W, data: &[u8]) -> io::Result<()> {
    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        write!(out, "{:08x}  ", line * BYTES_PER_LINE)?;
        for b in chunk {
            write!(out, "{b:02x} ")?;
        }
        for _ in chunk.len()..BYTES_PER_LINE {
            out.write_all(b"   ")?;
        }
        out.write_all(b" |")?;
        for &b in chunk {
            let c = if (32..=126).contains(&b) { b } else { b'.' };
            out.write_all(&[c])?;
        }
        out.write_all(b"|\n")?;
    }
    Ok(())
}
