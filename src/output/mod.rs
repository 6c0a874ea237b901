//! Output formatting for resampling results.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_comparison, format_interval, format_permutation};
