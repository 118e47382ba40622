mod text;

pub use text::{truncate_string, wrap_text_lines};
