use log::debug;

use crate::markdown::spacing::normalize_paragraph_spacing;
use crate::markdown::toc::{build_toc, extract_headings, filter_headings, insert_anchors, TocOptions};
use crate::utils::error::CliptocResult;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No headings at all; the text was only re-spaced
    NoHeadings,
    /// A table of contents with `items` entries was prepended
    Toc { items: usize },
}

/// Result of processing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub text: String,
    pub outcome: Outcome,
}

/// Normalize spacing, anchor the listed headings and prepend their TOC.
///
/// Headings outside the configured level range get neither an anchor nor an
/// entry. Without any heading the normalized text is returned as is.
pub fn process(markdown: &str, options: &TocOptions) -> CliptocResult<Processed> {
    let normalized = normalize_paragraph_spacing(markdown);
    let headings = extract_headings(&normalized, options);

    if headings.is_empty() {
        return Ok(Processed {
            text: normalized,
            outcome: Outcome::NoHeadings,
        });
    }

    let toc = build_toc(&headings, options);
    let listed: Vec<_> = filter_headings(&headings, options).into_iter().cloned().collect();
    debug!(
        "Listing {} of {} headings (levels {}..={})",
        listed.len(),
        headings.len(),
        options.min_level,
        options.max_level
    );

    if toc.is_empty() {
        debug!("No headings within the listed levels, leaving the TOC out");
    }

    let anchored = insert_anchors(&normalized, &listed)?;
    let combined = format!("{}\n{}", toc.html, anchored);

    Ok(Processed {
        text: combined.trim_start().to_string(),
        outcome: Outcome::Toc { items: toc.items },
    })
}
