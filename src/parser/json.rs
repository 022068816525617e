use super::{EmitSummary, FormatHandler, HandlerError, OutputLine, OutputWriter};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Banner written before any JSON field line
pub const JSON_HEADER: &str = "This is the JSON file processing output:";

const FIELD_PREFIX: &str = "Field#";

const BOM: char = '\u{feff}';

/// Flattens the properties of JSON objects into `Field#<name>=<value>` lines
pub struct JsonHandler;

impl FormatHandler for JsonHandler {
    fn name(&self) -> &str {
        "JSON"
    }

    fn extensions(&self) -> &[&str] {
        &[".json"]
    }

    fn parse_and_emit(&self, path: &Path) -> Result<EmitSummary, HandlerError> {
        let mut out = OutputWriter::create(path)?;
        out.write_header(JSON_HEADER)?;

        let text = fs::read_to_string(path)?;
        let text = text.strip_prefix(BOM).unwrap_or(&text);
        let root: Value = serde_json::from_str(text)?;

        for line in flatten_json(&root) {
            out.write_line(&line)?;
        }

        out.finish()
    }
}

/// Flatten a parsed JSON document into numbered lines
///
/// Only object properties produce lines. Arrays are walked transparently,
/// keeping the prefix and the running line number; scalars reached through
/// arrays (or at the top level) produce nothing. Property values are never
/// expanded: nested objects and arrays are rendered as JSON text.
pub fn flatten_json(root: &Value) -> Vec<OutputLine> {
    let mut lines = Vec::new();
    walk(root, FIELD_PREFIX, 1, &mut lines);
    lines
}

/// Returns the next free line number
fn walk(node: &Value, prefix: &str, mut next: usize, lines: &mut Vec<OutputLine>) -> usize {
    match node {
        Value::Object(map) => {
            for (name, value) in map {
                lines.push(OutputLine::single(
                    next,
                    format!("{}{}", prefix, name),
                    render_value(value),
                ));
                next += 1;
            }
        }
        Value::Array(items) => {
            for item in items {
                next = walk(item, prefix, next, lines);
            }
        }
        _ => {}
    }
    next
}

/// Literal text of a property value
///
/// Strings are written without quotes and `null` as nothing; everything else
/// uses compact JSON text so a line never spans several rows. Numbers keep the
/// digits they were written with.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
