//! Line counting used for progress reporting

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the lines of a file (a trailing line without newline counts)
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

    count_reader_lines(BufReader::new(file))
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Count the lines available from a reader
///
/// Works on raw bytes, so invalid UTF-8 does not affect the count.
pub fn count_reader_lines<R: BufRead>(mut reader: R) -> std::io::Result<usize> {
    let mut buffer = Vec::new();
    let mut count = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}
