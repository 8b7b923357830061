use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigLayer;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "cliptoc")]
#[command(about = "Space out Markdown on the clipboard and prepend an anchored table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Include level-1 headings in the table of contents
    #[arg(long, default_value_t = false)]
    pub include_h1: bool,

    /// Deepest heading level listed in the table of contents
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub max_level: Option<u8>,

    /// Give repeated headings distinct anchors (`-1`, `-2`, ...)
    #[arg(long, default_value_t = false)]
    pub unique_slugs: bool,

    /// Ignore heading-like lines inside fenced code blocks
    #[arg(long, default_value_t = false)]
    pub skip_code_blocks: bool,

    /// Class of the <nav> element wrapping the table of contents
    #[arg(long, value_name = "CLASS")]
    pub nav_class: Option<String>,

    /// Custom configuration file (repeatable, merged in order)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Read markdown from a file instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep serving the clipboard until another program takes it over (Linux)
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}

impl Cli {
    /// Settings given on the command line, applied over config files
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            include_h1: self.include_h1.then_some(true),
            max_level: self.max_level,
            unique_slugs: self.unique_slugs.then_some(true),
            skip_code_blocks: self.skip_code_blocks.then_some(true),
            nav_class: self.nav_class.clone(),
        }
    }
}
