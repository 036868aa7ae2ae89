//! Recursive tree construction over scanner tokens.
//!
//! A paired tag is closed by the *first* `</Name>` that follows it on the
//! same line. Same-named tags nested inside the content are not balanced,
//! which is sound only because the report format never nests a tag inside a
//! tag of the same name.
//!
//! Content never spans a line break. Reports are pretty-printed with one
//! leaf per line and container tags on lines of their own; a container tag
//! has no close tag on its line, so it is skipped and the scan picks up the
//! leaves inside it. The leaves of a real report therefore all land at the
//! top level of the returned tree, while single-line nesting such as
//! `<A><B>1</B></A>` still produces a nested node.

use crate::scanner::{Scanner, Tag, TagKind};
use crate::tree::{MarkupNode, MarkupValue};

/// Deepest nesting level parsed into nodes. Content below it is kept as text.
const MAX_DEPTH: usize = 256;

/// Parse tagged text into a [`MarkupNode`].
///
/// Never fails: text that does not match the tag grammar contributes no
/// entries. Later same-named siblings overwrite earlier ones.
pub fn parse(text: &str) -> MarkupNode {
    parse_level(text, 0)
}

fn parse_level(text: &str, depth: usize) -> MarkupNode {
    let mut node = MarkupNode::new();
    let mut scanner = Scanner::new(text);

    while let Some(tag) = scanner.next() {
        match tag.kind {
            TagKind::SelfClose => {
                node.insert(tag.name, MarkupValue::Null);
            }
            TagKind::Open => match paired_content(text, &tag) {
                Some((content, resume)) => {
                    node.insert(tag.name, content_value(content, depth + 1));
                    scanner.seek(resume);
                }
                // Unpaired: its attribute text may still hold tags.
                None => scanner.seek(tag.start + 1),
            },
            TagKind::Close => {}
        }
    }

    node
}

/// Find the close tag pairing with `open` on the same line.
///
/// Returns the content between the two tags and the offset just past the
/// close tag.
fn paired_content<'a>(text: &'a str, open: &Tag<'a>) -> Option<(&'a str, usize)> {
    let line_end = text[open.end..]
        .find('\n')
        .map_or(text.len(), |i| open.end + i);

    Scanner::bounded(text, open.end, line_end)
        .find(|tag| tag.kind == TagKind::Close && tag.name == open.name)
        .map(|close| (&text[open.end..close.start], close.end))
}

/// Classify the content of a tag nested `depth` levels below the root.
/// The recursive call only ever sees a strict substring of its caller's input.
fn content_value(content: &str, depth: usize) -> MarkupValue {
    if content.trim().is_empty() {
        return MarkupValue::Null;
    }
    if depth > MAX_DEPTH {
        return MarkupValue::Text(content.to_string());
    }
    let nested = parse_level(content, depth);
    if nested.is_empty() {
        MarkupValue::Text(content.to_string())
    } else {
        MarkupValue::Node(nested)
    }
}
