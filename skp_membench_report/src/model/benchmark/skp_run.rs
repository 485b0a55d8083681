//!
//! The measurements of one SKP across all strategies.
//!

use crate::model::benchmark::optimization_run::OptimizationRun;
use crate::model::strategy::Strategy;
use crate::model::strategy_map::StrategyMap;

///
/// The measurements of one SKP across all strategies.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkpRun {
    /// The SKP file name without directories.
    pub name: String,
    /// At most one run per strategy.
    pub runs: StrategyMap<OptimizationRun>,
}

impl SkpRun {
    ///
    /// Creates a run with no measurements from an SKP path.
    ///
    pub fn new(path: &str) -> Self {
        Self {
            name: Self::file_name(path).to_owned(),
            runs: StrategyMap::default(),
        }
    }

    ///
    /// Adds a measurement, returning the one it replaces.
    ///
    pub fn insert(&mut self, run: OptimizationRun) -> Option<OptimizationRun> {
        self.runs.insert(run.strategy, run)
    }

    ///
    /// Returns the run of `strategy`, if present.
    ///
    pub fn run(&self, strategy: Strategy) -> Option<&OptimizationRun> {
        self.runs.get(strategy)
    }

    ///
    /// Strips directory components from a path.
    ///
    /// Both separators are accepted, since records may come from any platform.
    ///
    fn file_name(path: &str) -> &str {
        path.rsplit(&['/', '\\'][..]).next().unwrap_or(path)
    }
}
