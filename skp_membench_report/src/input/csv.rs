//!
//! The CSV summary written by older versions of the benchmarking tool.
//!
//! The first line is `skp,<STRATEGY>,...`, each following line holds an SKP path and
//! the bytes allocated by every strategy. Negative values are the tool's error codes.
//!

/// The tool could not parse the SKP for the strategy.
const PARSE_FAILURE: i64 = -1;

/// The strategy's rendering differs from the reference.
const IMAGE_DIFF: i64 = -2;

use crate::model::benchmark::optimization_run::OptimizationRun;
use crate::model::benchmark::optimization_run::Status;
use crate::model::benchmark::skp_run::SkpRun;
use crate::model::benchmark::BenchmarkRecord;
use crate::model::strategy::Strategy;

///
/// Malformed CSV summary.
///
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct Error {
    /// The 1-based line number.
    pub line: usize,
    /// The problem description.
    pub message: String,
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl BenchmarkRecord {
    ///
    /// Parses a CSV summary from raw file contents.
    ///
    /// Invalid UTF-8 is reported at the line it occurs on.
    ///
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(bytes).map_err(|error| {
            let valid = &bytes[..error.valid_up_to()];
            let line = valid.iter().filter(|byte| **byte == b'\n').count() + 1;
            Error::new(line, format!("invalid UTF-8: {error}"))
        })?;
        Self::from_csv(text)
    }

    ///
    /// Parses a CSV summary.
    ///
    /// Columns of unknown strategies are ignored, empty cells are absent runs.
    ///
    pub fn from_csv(text: &str) -> Result<Self, Error> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let columns: Vec<Option<Strategy>> = match lines.next() {
            Some((_, header)) => header
                .split(',')
                .skip(1)
                .map(|column| {
                    let column = column.trim();
                    let strategy = column.parse::<Strategy>().ok();
                    if strategy.is_none() {
                        log::debug!("Ignoring the unknown strategy column `{column}`");
                    }
                    strategy
                })
                .collect(),
            None => return Ok(Self::default()),
        };

        let mut skp_runs = Vec::new();
        for (number, line) in lines {
            let mut cells = line.split(',').map(str::trim);
            let path = cells.next().unwrap_or_default();
            let mut skp_run = SkpRun::new(path);
            for (index, cell) in cells.enumerate() {
                let strategy = columns.get(index).ok_or_else(|| {
                    Error::new(
                        number,
                        format!("expected at most {} values", columns.len()),
                    )
                })?;
                let Some(strategy) = strategy else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let value: i64 = cell.parse().map_err(|error| {
                    Error::new(number, format!("invalid byte count `{cell}`: {error}"))
                })?;
                let run = match u64::try_from(value) {
                    Ok(bytes) => OptimizationRun::new(*strategy, bytes, Status::Success),
                    Err(_) if value == IMAGE_DIFF => OptimizationRun::image_diff(*strategy),
                    Err(_) => {
                        if value != PARSE_FAILURE {
                            log::debug!("Line {number}: treating error code {value} as a failure");
                        }
                        OptimizationRun::failed(*strategy)
                    }
                };
                skp_run.insert(run);
            }
            skp_runs.push(skp_run);
        }

        Ok(Self::new(skp_runs, vec![]))
    }
}
