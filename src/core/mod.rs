//! Service surface over the signal engine

pub mod http;

pub use http::*;
