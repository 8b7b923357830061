pub mod pipeline;
pub mod spacing;
pub mod toc;
pub mod types;
pub mod utils;

pub use pipeline::{process, Outcome};
