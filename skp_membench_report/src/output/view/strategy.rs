//!
//! The display record of one strategy.
//!

use crate::aggregation::comparison::Comparison;
use crate::model::benchmark::optimization_run::Status;
use crate::model::strategy::Strategy;
use crate::output::view::links::Links;

///
/// The display record of one strategy, for one SKP or for the summary.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyView {
    /// The strategy.
    pub strategy: Strategy,
    /// The allocated bytes, the total for the summary.
    /// Absent for runs without a usable measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u128>,
    /// The allocated bytes for humans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_pretty: Option<String>,
    /// The overhead relative to the candidate.
    /// Absent for the candidate itself and runs without a usable measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    /// The run outcome, absent for the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// The files produced by the run, absent for the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

///
/// An entry of the strategy display-name table.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrategyName {
    /// The strategy.
    pub identifier: Strategy,
    /// The human-readable name.
    pub display_name: String,
    /// Whether the strategy is the comparison baseline.
    pub is_candidate: bool,
}
