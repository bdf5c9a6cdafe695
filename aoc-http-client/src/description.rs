//! Puzzle description extraction
//!
//! A puzzle page holds one `<article class="day-desc">` per unlocked part.
//! Those blocks are rendered to Markdown and joined into a standalone
//! document whose first heading is promoted to level 1.

use crate::error::DescriptionError;
use crate::markdown::to_markdown;
use scraper::{ElementRef, Html};

/// Class attribute value marking a description block
pub const DESCRIPTION_CLASS: &str = "day-desc";

/// Separator appended after every rendered block
const BLOCK_SEPARATOR: &str = "\n\n";

/// Parse a raw page body into a document
///
/// # Errors
///
/// Returns `DescriptionError::Parse` if the body is not valid UTF-8.
pub fn parse_page(body: &[u8]) -> Result<Html, DescriptionError> {
    let html = std::str::from_utf8(body)?;
    Ok(Html::parse_document(html))
}

/// Whether an element is a puzzle description block
pub fn is_description_block(element: &ElementRef<'_>) -> bool {
    element.value().attr("class") == Some(DESCRIPTION_CLASS)
}

/// Collect all description blocks in document order
///
/// Pre-order traversal with an explicit stack. Traversal continues below a
/// match, so nested blocks are collected as well.
pub fn description_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    let mut matches = Vec::new();
    let mut stack = vec![document.root_element()];

    while let Some(element) = stack.pop() {
        if is_description_block(&element) {
            matches.push(element);
        }
        stack.extend(element.children().rev().filter_map(ElementRef::wrap));
    }

    matches
}

/// Extract the puzzle description of a page as Markdown
///
/// # Errors
///
/// * `DescriptionError::Empty` - The page has no description block
/// * `DescriptionError::Conversion` - A block could not be rendered
///
/// # Example
///
/// ```
/// use aoc_http_client::extract_description;
/// use scraper::Html;
///
/// let page = Html::parse_document(
///     r#"<main><article class="day-desc"><h2>--- Day 1 ---</h2><p>Hi</p></article></main>"#,
/// );
/// assert_eq!(extract_description(&page).unwrap(), "# --- Day 1 ---\n\nHi");
/// ```
pub fn extract_description(document: &Html) -> Result<String, DescriptionError> {
    let blocks = description_blocks(document);
    if blocks.is_empty() {
        return Err(DescriptionError::Empty);
    }

    let mut markdown = String::new();
    for (index, block) in blocks.into_iter().enumerate() {
        let rendered =
            to_markdown(block).map_err(|source| DescriptionError::Conversion { index, source })?;
        markdown.push_str(&rendered);
        markdown.push_str(BLOCK_SEPARATOR);
    }

    let markdown = strip_trailing_separator(markdown);
    Ok(promote_first_heading(&markdown))
}

/// Remove the separator after the last block, if present
pub fn strip_trailing_separator(mut markdown: String) -> String {
    if markdown.ends_with(BLOCK_SEPARATOR) {
        markdown.truncate(markdown.len() - BLOCK_SEPARATOR.len());
    }
    markdown
}

/// Turn the first ATX heading into a level-1 heading
///
/// Lines inside fenced code blocks are never treated as headings. Input
/// without any heading is returned unchanged.
pub fn promote_first_heading(markdown: &str) -> String {
    let mut offset = 0;
    let mut in_fence = false;

    for line in markdown.split_inclusive('\n') {
        if line.starts_with("```") {
            in_fence = !in_fence;
        } else if !in_fence && let Some(level) = atx_heading_level(line) {
            let mut promoted = String::with_capacity(markdown.len());
            promoted.push_str(&markdown[..offset]);
            promoted.push_str(&line[level - 1..]);
            promoted.push_str(&markdown[offset + line.len()..]);
            return promoted;
        }
        offset += line.len();
    }

    markdown.to_string()
}

/// Level of an ATX heading line (`## Title` is 2)
fn atx_heading_level(line: &str) -> Option<usize> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    let rest = &line[level..];
    let terminated = rest.is_empty() || rest.starts_with([' ', '\t', '\n', '\r']);
    ((1..=6).contains(&level) && terminated).then_some(level)
}
