//!
//! Benchmark record loading error.
//!

use std::path::PathBuf;

///
/// Benchmark record loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the benchmark file.
    #[error("Reading benchmark file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the benchmark file.
        path: PathBuf,
    },
    /// The benchmark file is not a well-formed protobuf record.
    #[error("Decoding benchmark file {path:?}: {error}")]
    Decoding {
        /// The underlying protobuf error.
        error: prost::DecodeError,
        /// The path to the benchmark file.
        path: PathBuf,
    },
    /// The benchmark file is not a well-formed CSV summary.
    #[error("Parsing benchmark file {path:?}: {error}")]
    Parsing {
        /// The underlying CSV error.
        error: crate::input::csv::Error,
        /// The path to the benchmark file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// The path of the offending benchmark file.
    ///
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Reading { path, .. } => path,
            Self::Decoding { path, .. } => path,
            Self::Parsing { path, .. } => path,
        }
    }
}
