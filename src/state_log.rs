//! Tabular persistence of generator state, one CSV row per step.
//!
//! The file carries a header row followed by `iteration,value` rows, the
//! register cells packed as a digit string (`1011...`). Analysis scripts
//! consume these files to replay or inspect a generation run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct StateLog {
    writer: BufWriter<File>,
}

impl StateLog {
    /// Creates (or truncates) the file and writes the header row.
    pub fn create<P: AsRef<Path>>(path: P, value_column: &str) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "iteration,{value_column}")?;
        Ok(Self { writer })
    }

    /// Appends one row for `iteration`, bits rendered as a digit string.
    pub fn append(&mut self, iteration: usize, bits: &[u8]) -> io::Result<()> {
        let cells: String = bits.iter().map(|&b| char::from(b'0' + (b & 1))).collect();
        writeln!(self.writer, "{iteration},{cells}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
