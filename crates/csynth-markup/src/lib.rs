//! Leaf-oriented tag tree parser for HLS synthesis reports.
//!
//! Converts the tagged text of a synthesis report into a [`MarkupNode`]: a
//! mapping from tag name to a nested node, a literal string, or null.
//!
//! This is not a general markup parser. It handles exactly what the report
//! format emits:
//! - **Paired tags:** `<Name attrs>content</Name>`, closed by the first
//!   `</Name>` on the same line. Same-named tags are never balanced.
//! - **Self-closing tags:** `<Name/>`, stored as null.
//!
//! Comments, processing instructions, CDATA and namespaces are skipped as
//! plain text.

pub mod parse;
pub mod scanner;
pub mod tree;

pub use parse::parse;
pub use scanner::{Scanner, Tag, TagKind};
pub use tree::{MarkupNode, MarkupValue};
