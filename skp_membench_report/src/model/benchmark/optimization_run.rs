//!
//! A measurement of one strategy on one SKP.
//!

use crate::model::strategy::Strategy;

///
/// The outcome reported by the benchmarking tool for a run.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The tool did not report an outcome.
    #[default]
    Unknown,
    /// The strategy processed the SKP.
    Success,
    /// The strategy could not process the SKP, the byte count is meaningless.
    Failed,
    /// The strategy processed the SKP but its rendering differs from the reference.
    /// The byte count is meaningless.
    #[serde(rename = "image_diff")]
    ImageDiff,
}

impl Status {
    ///
    /// Whether the run produced a usable byte count.
    ///
    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Unknown | Self::Success)
    }
}

///
/// A measurement of one strategy on one SKP.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRun {
    /// The measured strategy.
    pub strategy: Strategy,
    /// The memory allocated while replaying the SKP.
    pub allocated_bytes: u64,
    /// The run outcome.
    pub status: Status,
}

impl OptimizationRun {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(strategy: Strategy, allocated_bytes: u64, status: Status) -> Self {
        Self {
            strategy,
            allocated_bytes,
            status,
        }
    }

    ///
    /// A shortcut constructor for a failed run.
    ///
    pub fn failed(strategy: Strategy) -> Self {
        Self::new(strategy, 0, Status::Failed)
    }

    ///
    /// A shortcut constructor for a run whose rendering differs from the reference.
    ///
    pub fn image_diff(strategy: Strategy) -> Self {
        Self::new(strategy, 0, Status::ImageDiff)
    }

    ///
    /// The byte count usable in comparisons and totals.
    ///
    /// `None` for failed and image-diff runs.
    ///
    pub fn measured_bytes(&self) -> Option<u64> {
        self.status.is_measured().then_some(self.allocated_bytes)
    }
}
