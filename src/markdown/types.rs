/// A heading found in the normalized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (number of `#`, 1 to 6)
    pub level: u8,
    /// Title text with surrounding whitespace trimmed
    pub text: String,
    /// Anchor identifier derived from the title
    pub slug: String,
    /// Byte offset of the first `#` in the document the heading was read from
    pub offset: usize,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>, slug: impl Into<String>, offset: usize) -> Self {
        Self {
            level,
            text: text.into(),
            slug: slug.into(),
            offset,
        }
    }
}
