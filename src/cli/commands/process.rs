use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::cli::types::Cli;
use crate::clipboard::{DocumentSink, DocumentSource, FileDocument, SystemClipboard};
use crate::config;
use crate::markdown::toc::TocOptions;
use crate::markdown::{self, Outcome};
use crate::utils::error::CliptocResult;

/// Handle a run: load config, read once, transform, write once
pub fn handle_process_command(cli: &Cli) -> CliptocResult<Outcome> {
    let config = config::load_config(PathBuf::from("."), cli.config.clone(), &cli.overrides())?;
    let options = TocOptions::from(&config);

    let mut source = open_source(cli.input.as_deref())?;
    let mut sink = open_sink(cli.output.as_deref(), cli.wait)?;

    process_document(source.as_mut(), sink.as_mut(), &options)
}

/// Read the document, run the pipeline and write the result back.
/// The sink is written only once the whole result is ready.
pub fn process_document(
    source: &mut dyn DocumentSource,
    sink: &mut dyn DocumentSink,
    options: &TocOptions,
) -> CliptocResult<Outcome> {
    debug!("Reading markdown from {}", source.describe());
    let markdown = source.read()?;

    let processed = markdown::process(&markdown, options)?;

    sink.write(&processed.text)?;
    info!("{}", status_message(processed.outcome, &sink.describe()));

    Ok(processed.outcome)
}

/// One-line report of what was written where
pub fn status_message(outcome: Outcome, target: &str) -> String {
    match outcome {
        Outcome::NoHeadings => format!(
            "No headings found. Copied original content back to {}.",
            target
        ),
        Outcome::Toc { items } => format!(
            "Processed content copied to {} with {} TOC items.",
            target, items
        ),
    }
}

fn open_source(input: Option<&Path>) -> CliptocResult<Box<dyn DocumentSource>> {
    let source: Box<dyn DocumentSource> = match input {
        Some(path) => Box::new(FileDocument::new(path)),
        None => Box::new(SystemClipboard::open(false)?),
    };
    Ok(source)
}

fn open_sink(output: Option<&Path>, wait_for_paste: bool) -> CliptocResult<Box<dyn DocumentSink>> {
    let sink: Box<dyn DocumentSink> = match output {
        Some(path) => Box::new(FileDocument::new(path)),
        None => Box::new(SystemClipboard::open(wait_for_paste)?),
    };
    Ok(sink)
}
