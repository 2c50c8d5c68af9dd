//! Signal evaluation interfaces.

pub mod aggregation;
pub mod alerts;
pub mod analyzer;
pub mod engine;
pub mod evaluators;
pub mod performance;
pub mod scoring;
pub mod sizing;

pub use aggregation::*;
pub use alerts::*;
pub use analyzer::*;
pub use engine::*;
pub use evaluators::*;
pub use performance::*;
pub use sizing::*;
