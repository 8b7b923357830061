use crate::markdown::utils::{is_fence_line, split_lines};

/// Markers that mean the next line continues a block rather than starting a paragraph
const BLOCK_CONTINUATION_PREFIXES: [char; 4] = ['#', '-', '*', '>'];

/// Markdown hard line break
const HARD_BREAK: &str = "  ";

/// Insert a blank line between adjacent non-blank lines outside fenced code.
///
/// No blank line is added before a line that starts with a heading, list or
/// blockquote marker, nor after a line ending in a hard break. Fenced blocks
/// are copied verbatim. Any line break (CR, CRLF, LF, U+2028, ...) splits
/// lines, which are re-joined with `\n`; a trailing break is dropped.
pub fn normalize_paragraph_spacing(markdown: &str) -> String {
    let lines = split_lines(markdown);
    let mut output: Vec<&str> = Vec::with_capacity(lines.len() * 2);
    let mut in_code_block = false;

    for (i, line) in lines.iter().copied().enumerate() {
        if is_fence_line(line) {
            in_code_block = !in_code_block;
            output.push(line);
            continue;
        }

        output.push(line);

        if in_code_block {
            continue;
        }

        let Some(next_line) = lines.get(i + 1) else {
            continue;
        };

        if needs_separator(line, next_line) {
            output.push("");
        }
    }

    output.join("\n")
}

fn needs_separator(line: &str, next_line: &str) -> bool {
    let current = line.trim();
    let next = next_line.trim();

    !current.is_empty()
        && !next.is_empty()
        && !next.starts_with(BLOCK_CONTINUATION_PREFIXES)
        && !line.ends_with(HARD_BREAK)
}
