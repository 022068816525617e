mod error;
mod report;
mod tests;

pub use error::EngineError;
pub use report::{MemoryReporter, Reporter, StdoutReporter};

use crate::parser::{EmitSummary, HandlerRegistry};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to one input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A handler parsed the file and wrote its output
    Processed(EmitSummary),
    /// The path is not an existing regular file
    NotFound,
    /// No handler claims the extension; nothing is reported
    Skipped,
    /// The handler failed; partial output may remain
    Failed { handler: String, message: String },
}

impl Outcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed(_))
    }
}

/// Runs every input path through the handler registered for its extension
///
/// Failures are isolated per file: they are reported and the batch moves on.
pub struct Dispatcher<R: Reporter = StdoutReporter> {
    registry: HandlerRegistry,
    reporter: R,
}

impl Dispatcher<StdoutReporter> {
    /// Default handlers, reporting to stdout
    pub fn new() -> Self {
        Self::with_reporter(HandlerRegistry::with_defaults(), StdoutReporter)
    }
}

impl Default for Dispatcher<StdoutReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reporter> Dispatcher<R> {
    pub fn with_reporter(registry: HandlerRegistry, reporter: R) -> Self {
        Self { registry, reporter }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Process paths sequentially, in order
    ///
    /// Returns exactly one outcome per input path.
    pub fn process_all<I, P>(&self, paths: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|path| self.process_file(path.as_ref()))
            .collect()
    }

    /// Process every regular file directly inside `dir`, sorted by name
    pub fn process_directory(&self, dir: &Path) -> Result<Vec<Outcome>, EngineError> {
        let files = list_files(dir)?;
        tracing::debug!("Found {} files in {}", files.len(), dir.display());
        Ok(self.process_all(files))
    }

    pub fn process_file(&self, path: &Path) -> Outcome {
        if !path.is_file() {
            self.reporter
                .report(&format!("File not found: {}", path.display()));
            return Outcome::NotFound;
        }

        let Some(handler) = self.registry.select(path) else {
            return Outcome::Skipped;
        };

        tracing::debug!("Using {} handler for {}", handler.name(), path.display());

        match handler.parse_and_emit(path) {
            Ok(summary) => {
                tracing::debug!(
                    "Wrote {} lines to {}",
                    summary.lines_written,
                    summary.output_path.display()
                );
                self.reporter
                    .report(&format!("File processed successfully: {}", path.display()));
                Outcome::Processed(summary)
            }
            Err(e) => {
                let message = e.to_string();
                self.reporter.report(&format!(
                    "Error processing {} file: {}",
                    handler.name(),
                    message
                ));
                Outcome::Failed {
                    handler: handler.name().to_string(),
                    message,
                }
            }
        }
    }
}

/// Regular files directly inside `dir` (not recursive), sorted by file name
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| EngineError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
