use std::fmt;
use std::path::PathBuf;

/// One `label=value` pair of an output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A numbered record in a flattened output file
///
/// JSON output lines carry a single field; XML and CSV records carry several
/// positional fields (`Field#1`, `Field#2`, ...) joined with ` ==> `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// 1-based, continuous across the whole output file
    pub line_number: usize,
    pub fields: Vec<Field>,
}

impl OutputLine {
    /// Single `label=value` line
    pub fn single(line_number: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            line_number,
            fields: vec![Field::new(label, value)],
        }
    }

    /// Positional record: values are labelled `Field#1`, `Field#2`, ...
    pub fn record<I, S>(line_number: usize, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Field::new(format!("Field#{}", i + 1), value))
            .collect();

        Self {
            line_number,
            fields,
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line#{} :", self.line_number)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ==> ")?;
            }
            write!(f, "{}={}", field.label, field.value)?;
        }
        Ok(())
    }
}

/// Result of a successful parse-and-emit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    /// Output file that was written
    pub output_path: PathBuf,
    /// Number of numbered lines (headers excluded)
    pub lines_written: usize,
}
