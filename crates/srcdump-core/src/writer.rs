//! Dump assembly: header blocks plus decoded file contents.

use crate::ScrapeError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of the `=` separator lines in each header block.
const SEPARATOR_WIDTH: usize = 60;

/// Writes the dump document: one header block plus decoded content per file.
///
/// The output file is created (truncating any previous dump) when the writer
/// is constructed, and flushed by `finish` at the end of the run.
pub struct DumpWriter {
    out: BufWriter<File>,
}

impl DumpWriter {
    /// Create the output file, truncating any previous dump. Failure here is
    /// fatal to the run.
    pub fn create(path: &Path) -> Result<Self, ScrapeError> {
        let file = File::create(path).map_err(|source| ScrapeError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Append one file to the dump.
    ///
    /// The source is read in full before anything is written, so a file that
    /// cannot be read leaves no trace in the dump, not even a header. Invalid
    /// UTF-8 is decoded with the replacement character rather than failing.
    ///
    /// A read failure comes back as the recoverable `FileRead`; errors on the
    /// output stream itself propagate as fatal I/O errors.
    pub fn write_file(&mut self, source: &Path) -> Result<(), ScrapeError> {
        let bytes = std::fs::read(source).map_err(|e| ScrapeError::FileRead {
            path: source.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let separator = "=".repeat(SEPARATOR_WIDTH);
        write!(
            self.out,
            "\n{separator}\nFILE PATH: {}\n{separator}\n",
            source.display()
        )?;
        self.out.write_all(content.as_bytes())?;
        self.out.write_all(b"\n")?;

        Ok(())
    }

    /// Flush the dump to disk, surfacing any buffered write error.
    pub fn finish(mut self) -> Result<(), ScrapeError> {
        self.out.flush()?;
        Ok(())
    }
}
