use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a letter, number, underscore, whitespace, hyphen or Arabic
    static ref SLUG_STRIP_REGEX: Regex =
        Regex::new(r"[^\p{L}\p{N}_\s\-\x{0600}-\x{06FF}]").unwrap();

    static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Fence marker opening or closing a code block
pub const CODE_FENCE: &str = "```";

/// Whether a line opens or closes a fenced code block
pub fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with(CODE_FENCE)
}

/// Characters that end a line: CR (a CRLF pair counts once), vertical tab,
/// form feed, the file/group/record separators, NEL, the Unicode line and
/// paragraph separators and LF
const LINE_BREAKS: [char; 10] = [
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}', '\n',
];

/// Split text into lines on every line break character.
///
/// A final line break does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }

        lines.push(&text[start..i]);
        start = i + c.len_utf8();

        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Derive an anchor slug from heading text.
///
/// Trims and lowercases the text, drops every character that is not a
/// letter, number, underscore, whitespace, hyphen or in the Arabic block
/// (U+0600..U+06FF),
/// then turns each whitespace run into a single hyphen.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let kept = SLUG_STRIP_REGEX.replace_all(&lowered, "");
    WHITESPACE_RUN_REGEX.replace_all(&kept, "-").into_owned()
}

/// Escape `&`, `<`, `>`, `"` and `'` for use inside markup
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Hands out slugs, suffixing repeats with `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct SlugRegistry {
    issued: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `slug` if unused, otherwise the first free `slug-N`
    pub fn claim(&mut self, slug: String) -> String {
        if self.issued.insert(slug.clone()) {
            return slug;
        }

        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", slug, n);
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
