//!
//! Benchmark record loading.
//!

pub mod csv;
pub mod error;
pub mod protobuf;
pub mod source;

use std::path::Path;

use crate::model::benchmark::BenchmarkRecord;

use self::error::Error as InputError;
use self::source::Source;

impl BenchmarkRecord {
    ///
    /// Reads and decodes the benchmark file at `path`.
    ///
    pub fn load(path: &Path, source: Source) -> Result<Self, InputError> {
        let bytes = std::fs::read(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let record = match source {
            Source::Protobuf => {
                Self::decode(bytes.as_slice()).map_err(|error| InputError::Decoding {
                    error,
                    path: path.to_path_buf(),
                })?
            }
            Source::Csv => {
                Self::from_csv_bytes(bytes.as_slice()).map_err(|error| InputError::Parsing {
                    error,
                    path: path.to_path_buf(),
                })?
            }
        };
        log::debug!(
            "Loaded {} SKP runs from {path:?}",
            record.skp_runs.len()
        );
        Ok(record)
    }
}

impl TryFrom<&Path> for BenchmarkRecord {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::load(path, Source::Protobuf)
    }
}
