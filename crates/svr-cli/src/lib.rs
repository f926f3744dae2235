//! CLI library components for the observation dataset normalizer.

pub mod logging;
pub mod pipeline;
