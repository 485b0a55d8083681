//!
//! Per-strategy byte totals.
//!

use crate::model::benchmark::skp_run::SkpRun;
use crate::model::strategy::Strategy;
use crate::model::strategy_map::StrategyMap;

///
/// Per-strategy byte totals.
///
/// A strategy is present once at least one SKP reported a measurement for it.
/// Totals are `u128`, so summing any number of `u64` measurements cannot overflow.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StrategyTotals(pub StrategyMap<u128>);

impl StrategyTotals {
    ///
    /// The total of `strategy`, `None` if no SKP reported it.
    ///
    pub fn get(&self, strategy: Strategy) -> Option<u128> {
        self.0.get(strategy).copied()
    }

    ///
    /// Adds up two partial totals.
    ///
    pub fn merge(self, other: Self) -> Self {
        Self(
            Strategy::ALL
                .into_iter()
                .filter_map(|strategy| {
                    match (self.get(strategy), other.get(strategy)) {
                        (None, None) => None,
                        (first, second) => Some((
                            strategy,
                            first.unwrap_or_default() + second.unwrap_or_default(),
                        )),
                    }
                })
                .collect(),
        )
    }
}

impl From<&SkpRun> for StrategyTotals {
    fn from(skp_run: &SkpRun) -> Self {
        Self(
            skp_run
                .runs
                .iter()
                .filter_map(|(strategy, run)| {
                    run.measured_bytes()
                        .map(|bytes| (strategy, u128::from(bytes)))
                })
                .collect(),
        )
    }
}

impl std::iter::Sum for StrategyTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}
