use crate::markdown::toc::TocOptions;
use crate::markdown::types::Heading;
use crate::markdown::utils::escape_html;

/// Rendered table of contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOfContents {
    /// `<nav>` markup, ending in a newline; empty when there are no entries
    pub html: String,
    /// Number of `<li>` entries
    pub items: usize,
}

impl TableOfContents {
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

/// Headings whose level lies within the configured range
pub fn filter_headings<'a>(headings: &'a [Heading], options: &TocOptions) -> Vec<&'a Heading> {
    headings
        .iter()
        .filter(|h| h.level >= options.min_level && h.level <= options.max_level)
        .collect()
}

/// Generate a nested `<ul>` table of contents wrapped in a `<nav>`.
///
/// Nesting follows heading depth relative to the shallowest listed level:
/// a deeper heading opens one `<ul>` per level it descends, a shallower one
/// closes them again.
pub fn build_toc(headings: &[Heading], options: &TocOptions) -> TableOfContents {
    let filtered = filter_headings(headings, options);
    let Some(base) = filtered.iter().map(|h| h.level).min() else {
        return TableOfContents::default();
    };

    let mut lines = vec![format!("<nav class=\"{}\">", options.nav_class), "<ul>".to_string()];
    let mut current_level = base;

    for heading in &filtered {
        // Adjust nesting level
        while current_level < heading.level {
            lines.push("<ul>".to_string());
            current_level += 1;
        }

        while current_level > heading.level {
            lines.push("</ul>".to_string());
            current_level -= 1;
        }

        lines.push(format!(
            "<li><a href=\"#{}\">{}</a></li>",
            heading.slug,
            escape_html(&heading.text)
        ));
    }

    // Close any remaining lists
    while current_level > base {
        lines.push("</ul>".to_string());
        current_level -= 1;
    }

    lines.push("</ul>".to_string());
    lines.push("</nav>".to_string());
    lines.push(String::new());

    TableOfContents {
        html: lines.join("\n"),
        items: filtered.len(),
    }
}
