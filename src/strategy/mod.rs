//! Response normalization and strategy rendering.

pub mod classify;
pub mod json;
pub mod normalize;
pub mod render;
pub mod report;
pub mod shapes;

pub use classify::{Classification, classify};
pub use json::parse_embedded_json;
pub use normalize::{Normalized, NormalizedStrategy, normalize};
pub use report::StrategyReport;
