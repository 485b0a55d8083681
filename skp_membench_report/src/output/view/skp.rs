//!
//! The display record of one SKP.
//!

use crate::aggregation::comparison::Comparison;
use crate::output::view::strategy::StrategyView;

///
/// The display record of one SKP, or of the summary.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkpView {
    /// The SKP file name.
    pub name: String,
    /// The SKP file name without the known suffix.
    pub display_name: String,
    /// The reported strategies in report order.
    pub strategies: Vec<StrategyView>,
}

impl SkpView {
    /// The name of the synthesized summary record.
    pub const SUMMARY: &'static str = "SUMMARY";

    ///
    /// Returns `true` if any comparison is anomalous.
    ///
    pub fn has_anomalies(&self) -> bool {
        self.strategies
            .iter()
            .any(|view| view.comparison.as_ref().is_some_and(Comparison::is_anomalous))
    }
}
