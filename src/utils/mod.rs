//! Utility functions.
//!
//! - [`code_generator`] - Random redirect code generation

pub mod code_generator;
