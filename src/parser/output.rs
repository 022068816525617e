use super::{EmitSummary, HandlerError, OutputLine};
use crate::paths::output_path_for;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered writer for one `<stem>_out.txt` file
///
/// Creating the writer truncates any previous output. The buffer is flushed by
/// `finish`, or on drop when a handler bails out early, so whatever was written
/// before a failure stays on disk.
pub struct OutputWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines_written: usize,
}

impl OutputWriter {
    /// Create (or truncate) the output file belonging to `input`
    pub fn create(input: &Path) -> Result<Self, HandlerError> {
        let path = output_path_for(input);
        let file = File::create(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            lines_written: 0,
        })
    }

    /// Write an unnumbered line such as a format banner
    pub fn write_header(&mut self, header: &str) -> Result<(), HandlerError> {
        writeln!(self.writer, "{}", header)?;
        Ok(())
    }

    pub fn write_line(&mut self, line: &OutputLine) -> Result<(), HandlerError> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flush and close the file
    pub fn finish(mut self) -> Result<EmitSummary, HandlerError> {
        self.writer.flush()?;

        Ok(EmitSummary {
            output_path: self.path,
            lines_written: self.lines_written,
        })
    }
}
