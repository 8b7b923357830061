pub mod text;

pub use text::{escape_html, is_fence_line, slugify, split_lines, SlugRegistry};
