//!
//! The template-ready report view model.
//!

pub mod links;
pub mod skp;
pub mod strategy;

use crate::model::benchmark::UnsupportedDrawCommand;

use self::skp::SkpView;
use self::strategy::StrategyName;

///
/// The view model of one benchmark record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportViewModel {
    /// The report title.
    pub title: String,
    /// The totals across all SKPs.
    pub summary: SkpView,
    /// The SKPs in record order.
    pub skps: Vec<SkpView>,
    /// The draw commands the candidate pass could not handle, most frequent first.
    pub unsupported_draw_commands: Vec<UnsupportedDrawCommand>,
}

///
/// The view models of several benchmark records sharing one strategy table.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportSet {
    /// The strategy display-name table in report order.
    pub strategies: Vec<StrategyName>,
    /// The reports in input order.
    pub reports: Vec<ReportViewModel>,
}
