//!
//! A map with one optional slot per optimization strategy.
//!

use crate::model::strategy::Strategy;

///
/// A map with one optional slot per optimization strategy.
///
/// An empty slot means the strategy is absent, which is a valid state.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyMap<T> {
    /// The slots, indexed by [`Strategy::index`].
    slots: [Option<T>; Strategy::COUNT],
}

impl<T> Default for StrategyMap<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<T> StrategyMap<T> {
    ///
    /// Returns the value of `strategy`, if present.
    ///
    pub fn get(&self, strategy: Strategy) -> Option<&T> {
        self.slots[strategy.index()].as_ref()
    }

    ///
    /// Sets the value of `strategy`, returning the replaced one.
    ///
    pub fn insert(&mut self, strategy: Strategy, value: T) -> Option<T> {
        self.slots[strategy.index()].replace(value)
    }

    ///
    /// Returns `true` if no strategy is present.
    ///
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    ///
    /// Returns the number of present strategies.
    ///
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    ///
    /// Iterates over the present strategies in report order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &T)> {
        Strategy::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(strategy, slot)| slot.as_ref().map(|value| (strategy, value)))
    }

    ///
    /// Applies `mapper` to every present value.
    ///
    pub fn map<R>(&self, mut mapper: impl FnMut(Strategy, &T) -> R) -> StrategyMap<R> {
        let mut result = StrategyMap::default();
        for (strategy, value) in self.iter() {
            result.insert(strategy, mapper(strategy, value));
        }
        result
    }
}

impl<T> FromIterator<(Strategy, T)> for StrategyMap<T> {
    fn from_iter<I: IntoIterator<Item = (Strategy, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (strategy, value) in iter {
            map.insert(strategy, value);
        }
        map
    }
}
