//! Error types for htmltomd library.

use std::io;
use thiserror::Error;

/// Result type alias for htmltomd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading input or configuring a conversion.
///
/// The conversion itself never fails: a document without a title, without
/// a content root or without matching content converts to an empty result.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading HTML input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input dialect name is not recognized.
    #[error("Unknown input dialect: {0} (expected 'html', 'confluence' or 'google')")]
    UnknownDialect(String),

    /// The output style name is not recognized.
    #[error("Unknown output style: {0} (expected 'md' or 'hugo')")]
    UnknownOutputStyle(String),
}
