//! # markdown-lite-syntax
//!
//! The scanning half of markdown-lite: a character-driven state machine that
//! turns a small subset of Markdown into a flat stream of [`Token`]s.
//!
//! ## Supported syntax
//!
//! - `# heading`, ended by a blank line
//! - `- item` and `1. item` list lines
//! - `*italic*` and `**bold**` markers
//! - plain text, split into paragraphs by blank lines
//!
//! Nothing else is recognised. Characters that do not start one of the
//! constructs above are plain text.
//!
//! ## Module Structure
//!
//! ```text
//! markdown-lite-syntax/
//! ├── lib.rs      # This file - public API and integration tests
//! ├── cursor.rs   # Character cursor with peek and one-slot pushback
//! ├── token.rs    # Token enum and ScanError
//! └── scanner.rs  # Scanner state machine and tokenize()
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdown_lite_syntax::{tokenize, Token};
//!
//! let tokens = tokenize("- one\n- two\n\n");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::UnorderedListItem("one".into()),
//!         Token::UnorderedListItem("two".into()),
//!         Token::BlankLine,
//!     ]
//! );
//! ```
//!
//! Scanning never fails. Constructs cut short by the end of the input come
//! back as [`Token::Malformed`] carrying a [`ScanError`], and scanning simply
//! carries on with whatever follows.

pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use scanner::{Scanner, tokenize};
pub use token::{ScanError, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// One line per token: kind name plus debug-quoted text when present.
    fn format_tokens(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|token| match token {
                Token::Malformed(err) => format!("{} ({err})", token.kind_name()),
                _ => match token.text() {
                    Some(text) => format!("{} {text:?}", token.kind_name()),
                    None => token.kind_name().to_string(),
                },
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rebuilds the source from text and blank-line tokens.
    fn reassemble(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|token| match token {
                Token::BlankLine => "\n\n",
                _ => token.text().unwrap_or_default(),
            })
            .collect()
    }

    #[test]
    fn snapshot_mixed_document() {
        let input = "# Notes\n\nSome *soft* and **loud** text\nover two lines.\n\n- apples\n- pears\n\n1. first\n2. second\n";
        assert_snapshot!(format_tokens(&tokenize(input)), @r#"
        heading " Notes"
        blank-line
        text "Some "
        italic
        text "soft"
        italic
        text " and "
        bold
        text "loud"
        bold
        text " text\n"
        text "over two lines."
        blank-line
        unordered-list-item "apples"
        unordered-list-item "pears"
        blank-line
        ordered-list-item "first"
        ordered-list-item "second"
        "#);
    }

    #[test]
    fn snapshot_messy_unfinished_constructs() {
        // Half-written notes: an unclosed emphasis, then a heading that
        // never gets its blank line.
        let input = "Some *half done emphasis\n\n# Draft";
        assert_snapshot!(format_tokens(&tokenize(input)), @r#"
        text "Some "
        italic
        text "half done emphasis"
        blank-line
        malformed (premature end to heading element starting on line 3)
        "#);
    }

    fn assert_roundtrip(input: &str) {
        let tokens = tokenize(input);
        assert!(
            tokens
                .iter()
                .all(|t| matches!(t, Token::Text(_) | Token::BlankLine)),
            "Unexpected token kinds for {input:?}: {tokens:?}"
        );
        assert_eq!(reassemble(&tokens), input, "Roundtrip failed for: {input:?}");
    }

    #[test]
    fn roundtrip_preserves_plain_text() {
        let inputs = [
            "Hello, world!\n",
            "one\ntwo\nthree",
            "para one\n\npara two\n\n",
            "\n\n\n\n\n",
            "lead\n\n\ntrail\n",
            "tabs\tand  spaces \n\n end",
            "unicode: héllo wörld ✓\n",
            "numbers 12 and 3.5 inside\n",
            "\nleading newline",
            "\n",
            "trailing\n",
            "a\n\n\nb",
            "a\n\n\n\nb\n\n\n",
            "\n\n\nodd run first",
        ];

        for input in inputs {
            assert_roundtrip(input);
        }
    }

    #[test]
    fn roundtrip_holds_for_every_short_plain_document() {
        // All documents of up to six characters over a marker-free alphabet.
        let alphabet = ['a', ' ', '\t', '\n'];
        let mut documents = vec![String::new()];
        assert_roundtrip("");
        for _ in 0..6 {
            documents = documents
                .iter()
                .flat_map(|doc| alphabet.iter().map(move |c| format!("{doc}{c}")))
                .collect();
            for input in &documents {
                assert_roundtrip(input);
            }
        }
    }
}
