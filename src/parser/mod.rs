mod csv;
mod error;
mod json;
mod output;
mod registry;
mod result;
mod xml;

pub use csv::{flatten_csv_line, CsvHandler, CSV_FIELD_COUNT};
pub use error::{HandlerError, RegistryError};
pub use json::{flatten_json, render_value, JsonHandler, JSON_HEADER};
pub use output::OutputWriter;
pub use registry::HandlerRegistry;
pub use result::{EmitSummary, Field, OutputLine};
pub use xml::{item_record, menu_items, XmlDocument, XmlElement, XmlHandler};

use std::path::Path;

/// Core trait that all format handlers implement
pub trait FormatHandler: Send + Sync {
    /// Display name used in reports (e.g. "JSON")
    fn name(&self) -> &str;

    /// Extensions this handler accepts, lowercase with leading dot (e.g. ".json")
    fn extensions(&self) -> &[&str];

    /// Parse the file at `path` and write its flattened form to the sibling
    /// `_out.txt` file
    ///
    /// # Returns
    /// Output location and line count, or the error that aborted this file.
    /// Output written before the failure is left in place.
    fn parse_and_emit(&self, path: &Path) -> Result<EmitSummary, HandlerError>;
}
