//! Algorithms over patient datasets

pub mod risk;
