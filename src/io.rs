use crate::counter::BlockCounter;
use crate::error::{BlockCountError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const HEADER: &[u8] = b"Bloco\tOcorrencias\n";

/// Reads the whole file at `path` as one sequence: lines are joined with
/// their `'\n'` terminators removed and nothing in between.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| BlockCountError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    let sequence = read_sequence(BufReader::new(file)).map_err(unavailable)?;
    debug!("loaded {} bytes from {}", sequence.len(), path.display());
    Ok(sequence)
}

/// Joins the lines of `reader`. Only `'\n'` ends a line, so a `'\r'` from
/// CRLF input stays part of the sequence.
pub fn read_sequence<R: BufRead>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut sequence = Vec::new();
    let mut lines = 0usize;
    while reader.read_until(b'\n', &mut sequence)? != 0 {
        lines += 1;
        if sequence.last() == Some(&b'\n') {
            sequence.pop();
        }
    }
    debug!("joined {lines} lines");
    Ok(sequence)
}

/// Writes the header line and one `<block>\t<count>` line per distinct
/// block, in first-seen order.
pub fn write_counts<W: Write>(mut writer: W, counter: &BlockCounter) -> io::Result<()> {
    writer.write_all(HEADER)?;
    for (block, count) in counter.iter() {
        writer.write_all(block)?;
        writeln!(writer, "\t{count}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the counts into it.
pub fn save_counts(path: impl AsRef<Path>, counter: &BlockCounter) -> Result<()> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| BlockCountError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(unavailable)?;
    let mut writer = BufWriter::new(file);
    write_counts(&mut writer, counter).map_err(unavailable)?;
    writer.flush().map_err(unavailable)?;
    debug!("wrote {} blocks to {}", counter.distinct(), path.display());
    Ok(())
}
