use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
