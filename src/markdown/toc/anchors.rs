use crate::markdown::types::Heading;
use crate::utils::error::{CliptocError, CliptocResult};

/// Anchor line placed in front of a heading
pub fn anchor_tag(slug: &str) -> String {
    format!("<a id=\"{}\"></a>\n", slug)
}

/// Insert an anchor line immediately before each heading.
///
/// The output is assembled in one pass, copying the text between consecutive
/// heading offsets, so every offset refers to the untouched input. Headings
/// must be in ascending offset order and fall on character boundaries.
pub fn insert_anchors(markdown: &str, headings: &[Heading]) -> CliptocResult<String> {
    let mut out = String::with_capacity(markdown.len() + headings.len() * 32);
    let mut cursor = 0;

    for heading in headings {
        let offset = heading.offset;

        if offset < cursor {
            return Err(CliptocError::markdown(format!(
                "Heading '{}' at byte {} is out of document order",
                heading.text, offset
            )));
        }

        if offset > markdown.len() || !markdown.is_char_boundary(offset) {
            return Err(CliptocError::markdown(format!(
                "Heading '{}' has invalid offset {} for a document of {} bytes",
                heading.text,
                offset,
                markdown.len()
            )));
        }

        out.push_str(&markdown[cursor..offset]);
        out.push_str(&anchor_tag(&heading.slug));
        cursor = offset;
    }

    out.push_str(&markdown[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::{extract_headings, TocOptions};

    #[test]
    fn test_anchor_tag() {
        assert_eq!(anchor_tag("section-one"), "<a id=\"section-one\"></a>\n");
    }

    #[test]
    fn test_each_heading_gets_its_own_anchor() {
        let markdown = "## Alpha\n\nText.\n\n### Beta\n\nMore.";
        let headings = extract_headings(markdown, &TocOptions::default());
        let out = insert_anchors(markdown, &headings).unwrap();

        assert_eq!(
            out,
            "<a id=\"alpha\"></a>\n## Alpha\n\nText.\n\n<a id=\"beta\"></a>\n### Beta\n\nMore."
        );

        let alpha = out.find("<a id=\"alpha\"></a>\n## Alpha").unwrap();
        let beta = out.find("<a id=\"beta\"></a>\n### Beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_no_headings_is_identity() {
        let markdown = "Just text.";
        assert_eq!(insert_anchors(markdown, &[]).unwrap(), markdown);
    }

    #[test]
    fn test_multibyte_text_between_headings() {
        let markdown = "## مقدمه\n\nمتن فارسی\n\n## پایان";
        let headings = extract_headings(markdown, &TocOptions::default());
        let out = insert_anchors(markdown, &headings).unwrap();

        assert!(out.starts_with("<a id=\"مقدمه\"></a>\n## مقدمه"));
        assert!(out.contains("متن فارسی\n\n<a id=\"پایان\"></a>\n## پایان"));
    }

    #[test]
    fn test_rejects_unordered_headings() {
        let markdown = "## A\n\n## B";
        let mut headings = extract_headings(markdown, &TocOptions::default());
        headings.reverse();

        let err = insert_anchors(markdown, &headings).unwrap_err();
        assert!(matches!(err, CliptocError::Markdown(_)));
    }

    #[test]
    fn test_rejects_offset_past_end() {
        let headings = vec![Heading::new(2, "Ghost", "ghost", 100)];
        assert!(insert_anchors("## Short", &headings).is_err());
    }

    #[test]
    fn test_rejects_offset_inside_character() {
        let headings = vec![Heading::new(2, "Split", "split", 1)];
        assert!(insert_anchors("é## Split", &headings).is_err());
    }
}
