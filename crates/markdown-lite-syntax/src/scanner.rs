//! # Scanner - Classifying Markdown Source Into Tokens
//!
//! The scanner walks the source one character at a time. The first character
//! of each token picks a mode, and the mode decides how far the token runs:
//!
//! | Start | Mode | Ends |
//! |---|---|---|
//! | `#` | heading | before a newline that is followed by a newline |
//! | `-` | unordered item | at a newline (kept for the blank line if one follows) |
//! | digit `.` | ordered item | as above |
//! | `\n\n` | blank line | immediately |
//! | `*` / `**` | italic / bold | immediately |
//! | anything else | text | before `\n\n` or `*`, after a single `\n`, or at end of input |
//!
//! Whenever a mode stops on a character that belongs to the next token, the
//! character is pushed back onto the [`Cursor`] so the next call sees it.
//!
//! ```
//! use markdown_lite_syntax::{Scanner, Token};
//!
//! let mut scanner = Scanner::new("*hi*");
//! assert_eq!(scanner.next_token(), Token::Italic);
//! assert_eq!(scanner.next_token(), Token::Text("hi".into()));
//! assert_eq!(scanner.next_token(), Token::Italic);
//! assert_eq!(scanner.next_token(), Token::EndOfInput);
//! ```

use std::iter::FusedIterator;
use std::str::Chars;

use crate::cursor::Cursor;
use crate::token::{ScanError, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn token(self, text: String) -> Token {
        match self {
            ListKind::Unordered => Token::UnorderedListItem(text),
            ListKind::Ordered => Token::OrderedListItem(text),
        }
    }
}

/// Pull-based tokenizer over a character source.
///
/// Once [`Token::EndOfInput`] has been returned every further call returns it
/// again, so a caller looping until end of input always terminates.
#[derive(Debug, Clone)]
pub struct Scanner<I: Iterator<Item = char>> {
    cursor: Cursor<I>,
    finished: bool,
}

impl<'a> Scanner<Chars<'a>> {
    /// Creates a scanner over a complete source document.
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Creates a scanner over any character source.
    pub fn from_chars(chars: I) -> Self {
        Self {
            cursor: Cursor::new(chars),
            finished: false,
        }
    }

    /// Line number of the next unread character.
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Consumes exactly one token's worth of characters and classifies them.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::EndOfInput;
        }

        let line = self.cursor.line();
        let Some(c) = self.cursor.bump() else {
            self.finished = true;
            return Token::EndOfInput;
        };
        let next = self.cursor.peek();

        match c {
            '#' => self.heading(line),
            '-' => self.list_item(ListKind::Unordered, line),
            '0'..='9' if next == Some('.') => {
                self.cursor.bump();
                self.list_item(ListKind::Ordered, line)
            }
            '\n' if next == Some('\n') => {
                self.cursor.bump();
                Token::BlankLine
            }
            '*' => {
                if self.cursor.bump_if('*') {
                    Token::Bold
                } else {
                    Token::Italic
                }
            }
            _ => self.text(c),
        }
    }

    /// Consumes a newline if it ends a line on its own. A newline that starts
    /// a blank line is pushed back and `false` returned.
    fn take_line_end(&mut self, newline: char) -> bool {
        if self.cursor.peek() == Some('\n') {
            self.cursor.push_back(newline);
            false
        } else {
            true
        }
    }

    fn heading(&mut self, line: usize) -> Token {
        let mut text = String::new();
        loop {
            let Some(c) = self.cursor.bump() else {
                return Token::Malformed(ScanError::PrematureHeadingEnd { line });
            };
            if c == '\n' && !self.take_line_end(c) {
                return Token::Heading(text);
            }
            text.push(c);
        }
    }

    fn list_item(&mut self, kind: ListKind, line: usize) -> Token {
        while matches!(self.cursor.peek(), Some(' ' | '\t')) {
            self.cursor.bump();
        }

        let mut text = String::new();
        loop {
            let Some(c) = self.cursor.bump() else {
                return Token::Malformed(ScanError::PrematureListEnd { line });
            };
            if c == '\n' {
                // Whether or not the newline is kept for a following blank
                // line, it is never part of the item.
                self.take_line_end(c);
                return kind.token(text);
            }
            text.push(c);
        }
    }

    fn text(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        loop {
            match self.cursor.peek() {
                None | Some('*') => break,
                Some('\n') => {
                    self.cursor.bump();
                    if self.take_line_end('\n') {
                        text.push('\n');
                    }
                    break;
                }
                Some(c) => {
                    self.cursor.bump();
                    text.push(c);
                }
            }
        }
        Token::Text(text)
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    /// Yields every token before [`Token::EndOfInput`].
    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Scanner<I> {}

/// Tokenizes a whole document, excluding the final [`Token::EndOfInput`].
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
