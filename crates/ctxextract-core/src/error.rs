//! Fatal errors that abort an extraction run.
//!
//! Recoverable conditions (missing descriptor, missing context) are not
//! errors; they surface as [`crate::plan::SkipReason`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot read source directory {}", .path.display())]
    SourceRoot { path: PathBuf, source: io::Error },

    #[error("cannot create output directory {}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("cannot read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} is not a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("field '{field}' in {} is not a string", .path.display())]
    ContextNotString { path: PathBuf, field: String },

    #[error("derived filename {name:?} is not a plain file name")]
    InvalidFileName { name: String },

    #[error("cannot copy {} to {}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
