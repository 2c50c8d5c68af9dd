//! Strategy catalog and lookup.

pub mod catalog;
pub mod registry;

pub use registry::StrategyRegistry;
