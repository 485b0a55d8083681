//!
//! Utility functions
//!

pub mod bytes;
