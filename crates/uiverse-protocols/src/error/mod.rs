//! Error types for the tool protocol layer.

mod tool;

pub use tool::*;
