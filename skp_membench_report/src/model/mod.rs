//!
//! The benchmark data model.
//!

pub mod benchmark;
pub mod strategy;
pub mod strategy_map;
