//! Error types for dictionary loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a dictionary file
#[derive(Debug, Error)]
pub enum DictError {
    /// The file could not be opened or read
    #[error("failed to read dictionary {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file starts with a byte order mark for an encoding other than UTF-8
    #[error("dictionary {path:?} is encoded as {encoding}, only UTF-8 is supported")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The file contains bytes that are not valid UTF-8
    #[error("dictionary {path:?} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}
