//! CLI library components for the annotation converter.

pub mod logging;
pub mod pipeline;
