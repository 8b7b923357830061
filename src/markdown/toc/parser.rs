use std::ops::Range;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::markdown::toc::TocOptions;
use crate::markdown::types::Heading;
use crate::markdown::utils::{is_fence_line, slugify, SlugRegistry};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?m)^(#{1,6})\s+(.+)$").unwrap();
}

/// Extract ATX headings from markdown content, in document order
pub fn extract_headings(markdown: &str, options: &TocOptions) -> Vec<Heading> {
    let fenced = if options.skip_code_blocks {
        fenced_ranges(markdown)
    } else {
        Vec::new()
    };
    let mut registry = SlugRegistry::new();
    let mut headings = Vec::new();

    for cap in HEADING_REGEX.captures_iter(markdown) {
        let Some(whole) = cap.get(0) else {
            continue;
        };
        let offset = whole.start();

        if fenced.iter().any(|range| range.contains(&offset)) {
            debug!("Skipping heading-like line inside code block at byte {}", offset);
            continue;
        }

        let level = cap[1].len() as u8;
        let text = cap[2].trim();
        let mut slug = slugify(text);
        if options.unique_slugs {
            slug = registry.claim(slug);
        }

        headings.push(Heading::new(level, text, slug, offset));
    }

    debug!("Found {} headings", headings.len());
    headings
}

/// Byte ranges covered by fenced code blocks, fence lines included.
/// An unterminated fence runs to the end of the document.
fn fenced_ranges(markdown: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut open_at: Option<usize> = None;
    let mut pos = 0;

    for line in markdown.split_inclusive('\n') {
        let end = pos + line.len();
        if is_fence_line(line) {
            match open_at.take() {
                Some(start) => ranges.push(start..end),
                None => open_at = Some(pos),
            }
        }
        pos = end;
    }

    if let Some(start) = open_at {
        ranges.push(start..markdown.len());
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings() {
        let markdown = "# Top Heading\n\nText here.\n\n## Sub Heading\n\nMore text.";
        let headings = extract_headings(markdown, &TocOptions::default());

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0], Heading::new(1, "Top Heading", "top-heading", 0));
        assert_eq!(headings[1], Heading::new(2, "Sub Heading", "sub-heading", 27));
        assert_eq!(&markdown[headings[1].offset..headings[1].offset + 3], "## ");
    }

    #[test]
    fn test_heading_rules() {
        let markdown = "#NoSpace\n####### Seven\n###### Six\n#   Padded title   \nText # not heading";
        let headings = extract_headings(markdown, &TocOptions::default());

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 6);
        assert_eq!(headings[0].text, "Six");
        assert_eq!(headings[1].level, 1);
        assert_eq!(headings[1].text, "Padded title");
        assert_eq!(headings[1].slug, "padded-title");
    }

    #[test]
    fn test_offsets_are_byte_positions() {
        let markdown = "Überblick\n\n## Details";
        let headings = extract_headings(markdown, &TocOptions::default());

        assert_eq!(headings.len(), 1);
        assert!(markdown[headings[0].offset..].starts_with("## Details"));
    }

    #[test]
    fn test_duplicate_slugs_collide_by_default() {
        let markdown = "## Notes\n\n## Notes";
        let headings = extract_headings(markdown, &TocOptions::default());

        assert_eq!(headings[0].slug, "notes");
        assert_eq!(headings[1].slug, "notes");
    }

    #[test]
    fn test_unique_slugs() {
        let markdown = "## Notes\n\n## Notes\n\n## Notes";
        let options = TocOptions {
            unique_slugs: true,
            ..TocOptions::default()
        };
        let slugs: Vec<String> = extract_headings(markdown, &options)
            .into_iter()
            .map(|h| h.slug)
            .collect();

        assert_eq!(slugs, vec!["notes", "notes-1", "notes-2"]);
    }

    #[test]
    fn test_code_blocks_scanned_by_default() {
        let markdown = "## Usage\n\n```sh\n# install\nmake\n```";
        let headings = extract_headings(markdown, &TocOptions::default());

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].text, "install");
    }

    #[test]
    fn test_skip_code_blocks() {
        let markdown = "## Usage\n\n```sh\n# install\nmake\n```\n\n## After\n\n```\n# unterminated";
        let options = TocOptions {
            skip_code_blocks: true,
            ..TocOptions::default()
        };
        let headings = extract_headings(markdown, &options);

        let titles: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(titles, vec!["Usage", "After"]);
    }

    #[test]
    fn test_fenced_ranges() {
        let markdown = "a\n```\ncode\n```\nb";
        let ranges = fenced_ranges(markdown);
        assert_eq!(ranges, vec![2..15]);
        assert_eq!(&markdown[ranges[0].clone()], "```\ncode\n```\n");
    }
}
