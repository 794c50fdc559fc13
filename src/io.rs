/// Input acquisition and output delivery for the command-line surface.
///
/// Input is decoded strictly as UTF-8 with a leading BOM removed; file output is
/// written as UTF-8 without a BOM.
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Result, SegError};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read all of `path`, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    decode_utf8(bytes)
}

/// Strip a leading UTF-8 BOM and decode the rest.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    let bytes = if has_bom(&bytes) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };
    String::from_utf8(bytes).map_err(|e| SegError::Encoding(e.utf8_error().to_string()))
}

/// Write `text` to `path` (no BOM, no trailing newline), or to stdout followed by a newline.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text.as_bytes())?,
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", text)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// True if `bytes` starts with a UTF-8 BOM.
pub fn has_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(UTF8_BOM)
}
