//! CLI output: JSON envelope for `--json`, plain text otherwise.

mod response;
mod text;

pub use response::print_json_result;
pub use text::{print_text_result, print_usage};
