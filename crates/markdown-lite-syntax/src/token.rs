//! Token and scan error types produced by the [`Scanner`](crate::Scanner).

use thiserror::Error;

/// One lexical unit of the source document.
///
/// Variants that carry no text (`Bold`, `Italic`, `BlankLine`, `EndOfInput`)
/// have no payload at all, so a marker token can never carry stray text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Everything after the `#` up to the blank line that ends the heading.
    Heading(String),
    /// A `-` item, with the marker and the spacing after it removed.
    UnorderedListItem(String),
    /// A `N.` item, with the marker and the spacing after it removed.
    OrderedListItem(String),
    /// `**`
    Bold,
    /// `*`
    Italic,
    /// A run of plain text. Includes the trailing newline when one single
    /// newline ended the run.
    Text(String),
    /// Two consecutive newlines.
    BlankLine,
    EndOfInput,
    /// A construct that could not be completed.
    Malformed(ScanError),
}

impl Token {
    /// The literal text payload, if this kind carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Heading(text)
            | Token::UnorderedListItem(text)
            | Token::OrderedListItem(text)
            | Token::Text(text) => Some(text),
            Token::Bold
            | Token::Italic
            | Token::BlankLine
            | Token::EndOfInput
            | Token::Malformed(_) => None,
        }
    }

    /// Short kind name for logs and statistics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Heading(_) => "heading",
            Token::UnorderedListItem(_) => "unordered-list-item",
            Token::OrderedListItem(_) => "ordered-list-item",
            Token::Bold => "bold",
            Token::Italic => "italic",
            Token::Text(_) => "text",
            Token::BlankLine => "blank-line",
            Token::EndOfInput => "end-of-input",
            Token::Malformed(_) => "malformed",
        }
    }
}

/// Why a token came back as [`Token::Malformed`].
///
/// `line` is the line on which the unfinished construct started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("premature end to heading element starting on line {line}")]
    PrematureHeadingEnd { line: usize },

    #[error("premature end to list item starting on line {line}")]
    PrematureListEnd { line: usize },
}
