//! Markdown rendering of parsed HTML elements
//!
//! Covers the subset of HTML that puzzle pages use: headings, paragraphs,
//! preformatted blocks, inline code, emphasis, links, lists and rules.
//! Unknown elements are transparent; `script` and `style` are dropped.

use crate::error::ConversionError;
use scraper::ElementRef;
use std::fmt::Write;

/// Elements whose subtree is never rendered
const SKIPPED: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start and end a paragraph
const BLOCK_CONTAINERS: &[&str] = &[
    "p",
    "div",
    "article",
    "section",
    "main",
    "header",
    "footer",
    "blockquote",
    "body",
    "html",
];

/// Indentation of one list nesting level
const LIST_INDENT: &str = "    ";

#[derive(Debug, PartialEq, Eq)]
enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    Code(String),
    ListItem {
        list: usize,
        depth: usize,
        marker: String,
        text: String,
    },
    Rule,
}

enum Step<'a> {
    Enter(ElementRef<'a>),
    Text(&'a str),
    Leave(&'a str),
}

struct ListState {
    ordered: bool,
    next: usize,
    /// Marker and text of the item currently open in this list
    item: Option<(String, String)>,
}

#[derive(Default)]
struct Renderer {
    blocks: Vec<Block>,
    inline: String,
    heading: Option<usize>,
    lists: Vec<ListState>,
    /// `Some(href)` when the matching `<a>` opened a Markdown link
    links: Vec<Option<String>>,
    /// Serial number of the current top-level list
    list_serial: usize,
    pre_depth: usize,
    /// Output offsets where open inline code spans begin
    code_starts: Vec<usize>,
}

/// Render an element and its subtree to Markdown
///
/// Traversal uses an explicit stack, so deeply nested markup cannot exhaust
/// the call stack. The output has no trailing newline.
///
/// # Errors
///
/// * `ConversionError::EmptyElement` - The element contains no renderable text
/// * `ConversionError::Write` - Formatting the output failed
pub fn to_markdown(element: ElementRef<'_>) -> Result<String, ConversionError> {
    let mut renderer = Renderer::default();
    let mut stack = vec![Step::Enter(element)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(el) => {
                let name = el.value().name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                renderer.open(name, el.value().attr("href"));
                stack.push(Step::Leave(name));
                for child in el.children().rev() {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        stack.push(Step::Enter(child_el));
                    } else if let Some(text) = child.value().as_text() {
                        stack.push(Step::Text(text));
                    }
                }
            }
            Step::Text(text) => renderer.text(text),
            Step::Leave(name) => renderer.close(name),
        }
    }

    let blocks = renderer.finish();
    if blocks.is_empty() {
        return Err(ConversionError::EmptyElement(
            element.value().name().to_string(),
        ));
    }
    render_blocks(&blocks)
}

fn heading_level(name: &str) -> Option<usize> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

impl Renderer {
    /// Whether inline Markdown syntax may be emitted at this point
    fn plain(&self) -> bool {
        self.pre_depth == 0 && self.code_starts.is_empty()
    }

    fn open(&mut self, name: &str, href: Option<&str>) {
        if let Some(level) = heading_level(name) {
            self.break_item();
            self.heading = Some(level);
            return;
        }

        match name {
            "pre" => {
                self.break_item();
                self.pre_depth += 1;
            }
            "code" if self.pre_depth == 0 => self.code_starts.push(self.inline.len()),
            "em" | "i" if self.plain() => self.inline.push('*'),
            "strong" | "b" if self.plain() => self.inline.push_str("**"),
            "a" => {
                let link = href.filter(|_| self.plain()).map(str::to_string);
                if link.is_some() {
                    self.inline.push('[');
                }
                self.links.push(link);
            }
            "br" if self.pre_depth > 0 => self.inline.push('\n'),
            "br" => self.inline.push_str("  \n"),
            "hr" => {
                self.break_item();
                self.blocks.push(Block::Rule);
            }
            "ul" | "ol" => {
                self.flush();
                self.emit_item();
                if self.lists.is_empty() {
                    self.list_serial += 1;
                }
                self.lists.push(ListState {
                    ordered: name == "ol",
                    next: 1,
                    item: None,
                });
            }
            "li" => {
                self.flush();
                self.emit_item();
                if let Some(list) = self.lists.last_mut() {
                    let marker = if list.ordered {
                        let marker = format!("{}.", list.next);
                        list.next += 1;
                        marker
                    } else {
                        "-".to_string()
                    };
                    list.item = Some((marker, String::new()));
                }
            }
            _ if BLOCK_CONTAINERS.contains(&name) => self.flush(),
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        if heading_level(name).is_some() {
            let text = self.take_inline();
            if let Some(level) = self.heading.take()
                && !text.is_empty()
            {
                self.blocks.push(Block::Heading { level, text });
            }
            return;
        }

        match name {
            "pre" => {
                self.pre_depth = self.pre_depth.saturating_sub(1);
                if self.pre_depth == 0 {
                    let code = std::mem::take(&mut self.inline);
                    let code = code.trim_end_matches(['\n', '\r']);
                    if !code.trim().is_empty() {
                        self.blocks.push(Block::Code(code.to_string()));
                    }
                }
            }
            "code" if self.pre_depth == 0 => {
                if let Some(start) = self.code_starts.pop()
                    && self.code_starts.is_empty()
                {
                    self.close_code(start);
                }
            }
            "em" | "i" if self.plain() => self.close_marker("*"),
            "strong" | "b" if self.plain() => self.close_marker("**"),
            "a" => {
                if let Some(Some(href)) = self.links.pop() {
                    if self.inline.ends_with('[') {
                        self.inline.pop();
                    } else {
                        self.inline.push_str("](");
                        self.inline.push_str(&href);
                        self.inline.push(')');
                    }
                }
            }
            "li" => {
                self.flush();
                self.emit_item();
            }
            "ul" | "ol" => {
                self.flush();
                self.emit_item();
                self.lists.pop();
            }
            _ if BLOCK_CONTAINERS.contains(&name) => self.flush(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.pre_depth > 0 {
            self.inline.push_str(text);
            return;
        }

        let escape = self.code_starts.is_empty();
        if text.starts_with(char::is_whitespace) {
            self.space();
        }
        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                self.inline.push(' ');
            }
            if escape {
                push_escaped(&mut self.inline, word);
            } else {
                self.inline.push_str(word);
            }
        }
        if text.ends_with(char::is_whitespace) {
            self.space();
        }
    }

    fn space(&mut self) {
        if !self.inline.is_empty() && !self.inline.ends_with([' ', '\n']) {
            self.inline.push(' ');
        }
    }

    /// Close an inline marker, dropping it entirely if nothing was written
    fn close_marker(&mut self, marker: &str) {
        let trimmed = self.inline.trim_end_matches(' ').len();
        let trailing = self.inline.len() - trimmed;
        self.inline.truncate(trimmed);

        let opened_at = self.inline.len().saturating_sub(marker.len());
        if self.inline.ends_with(marker) && !self.inline[..opened_at].ends_with('\\') {
            self.inline.truncate(opened_at);
        } else {
            self.inline.push_str(marker);
        }
        if trailing > 0 {
            self.inline.push(' ');
        }
    }

    /// Wrap everything written since `start` in a code span
    ///
    /// The fence is one backtick longer than the longest backtick run in the
    /// content. Content touching a backtick is padded with spaces.
    fn close_code(&mut self, start: usize) {
        let content = self.inline.split_off(start);
        let leading = content.starts_with(' ');
        let trailing = content.ends_with(' ');
        let content = content.trim_matches(' ');

        if leading {
            self.space();
        }
        if !content.is_empty() {
            let fence = "`".repeat(longest_backtick_run(content) + 1);
            let pad = if content.starts_with('`') || content.ends_with('`') {
                " "
            } else {
                ""
            };
            self.inline.push_str(&fence);
            self.inline.push_str(pad);
            self.inline.push_str(content);
            self.inline.push_str(pad);
            self.inline.push_str(&fence);
        }
        if trailing {
            self.space();
        }
    }

    fn take_inline(&mut self) -> String {
        let text = self.inline.trim().to_string();
        self.inline.clear();
        text
    }

    /// End the current run of inline text
    fn flush(&mut self) {
        if self.heading.is_some() || self.pre_depth > 0 {
            return;
        }
        let text = self.take_inline();
        if text.is_empty() {
            return;
        }
        match self.lists.last_mut().and_then(|l| l.item.as_mut()) {
            Some((_, item)) => {
                if !item.is_empty() {
                    item.push(' ');
                }
                item.push_str(&text);
            }
            None => self.blocks.push(Block::Paragraph(escape_line_starts(&text))),
        }
    }

    /// Close the open list item ahead of a block that cannot live inside it
    ///
    /// Text after the block continues as a paragraph.
    fn break_item(&mut self) {
        self.flush();
        self.emit_item();
    }

    /// Emit the open item of the innermost list, if any
    fn emit_item(&mut self) {
        let depth = self.lists.len().saturating_sub(1);
        if let Some(list) = self.lists.last_mut()
            && let Some((marker, text)) = list.item.take()
            && !text.is_empty()
        {
            self.blocks.push(Block::ListItem {
                list: self.list_serial,
                depth,
                marker,
                text: escape_line_starts(&text),
            });
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn push_escaped(out: &mut String, word: &str) {
    for c in word.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0)
}

/// Escape characters that would open a block construct at a line start
fn escape_line_starts(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        let (number, rest) = line.split_at(digits);
        if digits > 0 && rest.starts_with(['.', ')']) {
            out.push_str(number);
            out.push('\\');
            out.push_str(rest);
        } else if digits == 0 && line.starts_with(['#', '>', '-', '+', '=', '~']) {
            out.push('\\');
            out.push_str(line);
        } else {
            out.push_str(line);
        }
    }
    out
}

fn render_blocks(blocks: &[Block]) -> Result<String, ConversionError> {
    let mut out = String::new();
    let mut previous: Option<&Block> = None;

    for block in blocks {
        if let Some(prev) = previous {
            let tight = matches!(
                (prev, block),
                (Block::ListItem { list: a, .. }, Block::ListItem { list: b, .. }) if a == b
            );
            out.push_str(if tight { "\n" } else { "\n\n" });
        }

        match block {
            Block::Heading { level, text } => write!(out, "{} {}", "#".repeat(*level), text)?,
            Block::Paragraph(text) => out.push_str(text),
            Block::Code(code) => write!(out, "```\n{}\n```", code)?,
            Block::ListItem {
                depth,
                marker,
                text,
                ..
            } => write!(out, "{}{} {}", LIST_INDENT.repeat(*depth), marker, text)?,
            Block::Rule => out.push_str("---"),
        }
        previous = Some(block);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn render(html: &str, selector: &str) -> Result<String, ConversionError> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        let element = fragment.select(&selector).next().unwrap();
        to_markdown(element)
    }

    #[test]
    fn test_heading_and_paragraph() {
        let html = r#"<article><h2>--- Day 1: Trebuchet?! ---</h2><p>Something is <em>wrong</em> with <code>x</code>.</p></article>"#;
        assert_eq!(
            render(html, "article").unwrap(),
            "## --- Day 1: Trebuchet?! ---\n\nSomething is *wrong* with `x`."
        );
    }

    #[test]
    fn test_preformatted_block_keeps_whitespace() {
        let html = "<article><p>For example:</p><pre><code>1abc2\n  pqr3stu8vwx\n</code></pre></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "For example:\n\n```\n1abc2\n  pqr3stu8vwx\n```"
        );
    }

    #[test]
    fn test_emphasis_inside_code_is_plain() {
        let html = "<article><p>The answer is <code><em>142</em></code>.</p><pre><code>a<em>b</em>c</code></pre></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "The answer is `142`.\n\n```\nabc\n```"
        );
    }

    #[test]
    fn test_lists() {
        let html = "<article><ul><li>first</li><li>second <code>2</code></li></ul><ol><li>one</li><li>two<ul><li>nested</li></ul></li></ol></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "- first\n- second `2`\n\n1. one\n2. two\n    - nested"
        );
    }

    #[test]
    fn test_block_inside_list_item_keeps_order() {
        let html = "<article><ul><li>See this:<pre><code>a\nb</code></pre></li><li>next</li></ul></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "- See this:\n\n```\na\nb\n```\n\n- next"
        );

        let html = "<article><ol><li>one<h3>Aside</h3>tail</li><li>two<hr></li></ol></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "1. one\n\n### Aside\n\ntail\n\n2. two\n\n---"
        );
    }

    #[test]
    fn test_escapes_block_markers_at_line_start() {
        let html = "<article><p># marks walls</p><p>- not a list</p><p>3. not ordered</p><p>&gt; nor a quote<br>+ on each line</p><p>a # b - c</p></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "\\# marks walls\n\n\\- not a list\n\n3\\. not ordered\n\n\\> nor a quote  \n\\+ on each line\n\na # b - c"
        );
    }

    #[test]
    fn test_code_span_fence_outgrows_backticks() {
        let html = "<article><p>Use <code>a`b</code> here</p></article>";
        assert_eq!(render(html, "article").unwrap(), "Use ``a`b`` here");

        let html = "<article><p>Tick <code>`</code> and <code>``x</code>.</p></article>";
        assert_eq!(
            render(html, "article").unwrap(),
            "Tick `` ` `` and ``` ``x ```."
        );
    }

    #[test]
    fn test_empty_code_span_is_dropped() {
        let html = "<article><p>a <code> </code>b</p></article>";
        assert_eq!(render(html, "article").unwrap(), "a b");
    }

    #[test]
    fn test_links_and_strong() {
        let html = r#"<article><p>To begin, <a href="1/input" target="_blank">get your puzzle input</a> and <strong>hurry</strong>.</p></article>"#;
        assert_eq!(
            render(html, "article").unwrap(),
            "To begin, [get your puzzle input](1/input) and **hurry**."
        );
    }

    #[test]
    fn test_anchor_without_href_is_plain_text() {
        let html = r#"<article><p><a name="part2">Part two</a> begins</p></article>"#;
        assert_eq!(render(html, "article").unwrap(), "Part two begins");
    }

    #[test]
    fn test_escapes_markdown_in_text() {
        let html = "<article><p>a*b_c [d]</p></article>";
        assert_eq!(render(html, "article").unwrap(), r"a\*b\_c \[d\]");
    }

    #[test]
    fn test_collapses_whitespace() {
        let html = "<article><p>\n  lots   of\n\n space  </p>\n\n<p>next</p></article>";
        assert_eq!(render(html, "article").unwrap(), "lots of space\n\nnext");
    }

    #[test]
    fn test_skips_scripts_and_rules() {
        let html = "<article><p>before</p><script>var x = 1;</script><hr><p>after</p></article>";
        assert_eq!(render(html, "article").unwrap(), "before\n\n---\n\nafter");
    }

    #[test]
    fn test_transparent_span() {
        let html = r#"<article><p>A <span title="hidden joke">hover</span> text</p></article>"#;
        assert_eq!(render(html, "article").unwrap(), "A hover text");
    }

    #[test]
    fn test_empty_element_fails() {
        let html = r#"<article class="day-desc">   </article>"#;
        match render(html, "article") {
            Err(ConversionError::EmptyElement(name)) => assert_eq!(name, "article"),
            other => panic!("Expected EmptyElement, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 2_000;
        let html = format!(
            "<article>{}deep{}</article>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        assert_eq!(render(&html, "article").unwrap(), "deep");
    }
}
