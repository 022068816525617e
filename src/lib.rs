// Public API exports
pub mod engine;
pub mod parser;
pub mod paths;

// Re-export main types for convenience
pub use engine::{
    list_files, Dispatcher, EngineError, MemoryReporter, Outcome, Reporter, StdoutReporter,
};

pub use parser::{
    CsvHandler, EmitSummary, Field, FormatHandler, HandlerError, HandlerRegistry, JsonHandler,
    OutputLine, OutputWriter, RegistryError, XmlDocument, XmlElement, XmlHandler,
};

pub use paths::{extension_of, normalize_extension, output_path_for, OUTPUT_SUFFIX};
