use super::{EmitSummary, FormatHandler, HandlerError, OutputLine, OutputWriter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of leading fields kept from each row
pub const CSV_FIELD_COUNT: usize = 6;

/// Emits the first six comma-separated fields of every row that has them
///
/// Splitting is naive: no quoting, no escaping, no header handling.
pub struct CsvHandler;

impl FormatHandler for CsvHandler {
    fn name(&self) -> &str {
        "CSV"
    }

    fn extensions(&self) -> &[&str] {
        &[".csv"]
    }

    fn parse_and_emit(&self, path: &Path) -> Result<EmitSummary, HandlerError> {
        let reader = BufReader::new(File::open(path)?);
        let mut out = OutputWriter::create(path)?;

        let mut next = 1;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = match i {
                0 => line.strip_prefix('\u{feff}').unwrap_or(&line),
                _ => &line,
            };
            if let Some(record) = flatten_csv_line(line, next) {
                out.write_line(&record)?;
                next += 1;
            }
        }

        out.finish()
    }
}

/// Turn one physical line into a record, or `None` if it has fewer than six fields
pub fn flatten_csv_line(line: &str, line_number: usize) -> Option<OutputLine> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(',').take(CSV_FIELD_COUNT).collect();

    if fields.len() < CSV_FIELD_COUNT {
        return None;
    }

    Some(OutputLine::record(line_number, fields))
}
