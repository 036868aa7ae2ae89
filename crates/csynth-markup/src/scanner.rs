//! Tag tokenizer over borrowed text spans.
//!
//! The scanner recognizes three token shapes and treats everything else as
//! text: opening tags (`<Name>`, `<Name attr="v">`), closing tags
//! (`</Name>`) and self-closing tags (`<Name/>`, `<Name attr="v"/>`).

/// The shape of a recognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<Name ...>`
    Open,
    /// `</Name>`
    Close,
    /// `<Name .../>`
    SelfClose,
}

/// A recognized tag, located by byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag shape.
    pub kind: TagKind,
    /// Tag name, borrowed from the input.
    pub name: &'a str,
    /// Offset of the leading `<`.
    pub start: usize,
    /// Offset just past the trailing `>`.
    pub end: usize,
}

/// Whether `b` may appear in a tag name (`Worst-caseLatency`, `BRAM_18K`, ...).
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'\'')
}

/// Try to read a tag starting at the `<` at byte offset `start`.
///
/// Returns `None` if `start` is not a `<` or the text there is not a
/// recognizable tag.
pub fn lex_tag(text: &str, start: usize) -> Option<Tag<'_>> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'<') {
        return None;
    }

    let closing = bytes.get(start + 1) == Some(&b'/');
    let name_start = if closing { start + 2 } else { start + 1 };
    let name_len = bytes[name_start.min(bytes.len())..]
        .iter()
        .take_while(|b| is_name_byte(**b))
        .count();
    if name_len == 0 {
        return None;
    }
    let name_end = name_start + name_len;
    // Name bytes are ASCII, so both offsets sit on char boundaries.
    let name = &text[name_start..name_end];

    if closing {
        return (bytes.get(name_end) == Some(&b'>')).then_some(Tag {
            kind: TagKind::Close,
            name,
            start,
            end: name_end + 1,
        });
    }

    match *bytes.get(name_end)? {
        b'>' => Some(Tag {
            kind: TagKind::Open,
            name,
            start,
            end: name_end + 1,
        }),
        b'/' if bytes.get(name_end + 1) == Some(&b'>') => Some(Tag {
            kind: TagKind::SelfClose,
            name,
            start,
            end: name_end + 2,
        }),
        b if b.is_ascii_whitespace() => {
            let gt = name_end + bytes[name_end..].iter().position(|b| *b == b'>')?;
            let kind = if bytes[gt - 1] == b'/' {
                TagKind::SelfClose
            } else {
                TagKind::Open
            };
            Some(Tag {
                kind,
                name,
                start,
                end: gt + 1,
            })
        }
        _ => None,
    }
}

/// Iterator over the tags of a text region, in document order and
/// non-overlapping.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    limit: usize,
}

impl<'a> Scanner<'a> {
    /// Scan the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            limit: text.len(),
        }
    }

    /// Scan only tags starting within `text[from..limit]`.
    ///
    /// Offsets in the yielded tags remain relative to the whole of `text`.
    pub fn bounded(text: &'a str, from: usize, limit: usize) -> Self {
        let limit = limit.min(text.len());
        Self {
            text,
            pos: from.min(limit),
            limit,
        }
    }

    /// Resume scanning at byte offset `pos`.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.limit);
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        while self.pos < self.limit {
            let offset = self.text.as_bytes()[self.pos..self.limit]
                .iter()
                .position(|b| *b == b'<')?;
            let start = self.pos + offset;
            match lex_tag(self.text, start) {
                Some(tag) => {
                    self.pos = tag.end;
                    return Some(tag);
                }
                None => self.pos = start + 1,
            }
        }
        None
    }
}
