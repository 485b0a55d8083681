//!
//! The SKP memory benchmark report library.
//!

pub mod aggregation;
pub mod config;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

pub use crate::aggregation::build_report;
pub use crate::aggregation::build_reports;
pub use crate::aggregation::comparison::Comparison;
pub use crate::aggregation::totals::StrategyTotals;
pub use crate::config::Config;
pub use crate::input::error::Error as DecodeError;
pub use crate::input::source::Source as InputSource;
pub use crate::model::benchmark::optimization_run::OptimizationRun;
pub use crate::model::benchmark::optimization_run::Status as OptimizationStatus;
pub use crate::model::benchmark::skp_run::SkpRun;
pub use crate::model::benchmark::BenchmarkRecord;
pub use crate::model::benchmark::UnsupportedDrawCommand;
pub use crate::model::strategy::Strategy;
pub use crate::model::strategy_map::StrategyMap;
pub use crate::output::view::skp::SkpView;
pub use crate::output::view::strategy::StrategyName;
pub use crate::output::view::strategy::StrategyView;
pub use crate::output::view::ReportSet;
pub use crate::output::view::ReportViewModel;
pub use crate::output::Output;
pub use crate::util::bytes::pretty_byte_str;
