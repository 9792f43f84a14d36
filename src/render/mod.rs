//! Rendering module for converting outline results to output formats.

mod json;
mod text;

pub use json::{to_json, to_json_value, JsonFormat};
pub use text::to_text;
