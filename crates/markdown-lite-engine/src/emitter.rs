//! Token-to-HTML state machine.
//!
//! The emitter owns the [`OpenStack`] and decides, token by token, whether to
//! open a new element, write into the current one, or close what is open.
//! The stack only ever holds one block at its bottom with emphasis spans
//! above it; starting a new list first closes everything. Headings are
//! written in place and never touch the stack, and a blank line closes only
//! the top entry.

use std::io::{self, Write};

use markdown_lite_syntax::Token;

use crate::diagnostic::Diagnostic;
use crate::html;
use crate::stack::{Open, OpenStack};

/// Writes HTML for a token stream into `out`.
///
/// Call [`begin`](Emitter::begin) once, [`emit`](Emitter::emit) per token,
/// then [`finish`](Emitter::finish) to close everything still open.
pub struct Emitter<W: Write> {
    out: W,
    stack: OpenStack,
    diagnostics: Vec<Diagnostic>,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stack: OpenStack::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The elements currently open, bottom first.
    pub fn open_elements(&self) -> &[Open] {
        self.stack.as_slice()
    }

    /// Writes the document prologue.
    pub fn begin(&mut self) -> io::Result<()> {
        self.write(html::DOCUMENT_PROLOGUE)
    }

    /// Applies one token.
    pub fn emit(&mut self, token: Token) -> io::Result<()> {
        log::trace!("token {} with stack {:?}", token.kind_name(), self.stack);
        match token {
            Token::Bold => self.toggle(Open::Bold),
            Token::Italic => self.toggle(Open::Italic),
            Token::Heading(text) => {
                self.write(html::HEADING_OPEN)?;
                self.write(&text)?;
                self.write(html::HEADING_CLOSE)
            }
            Token::UnorderedListItem(text) => self.list_item(Open::UnorderedList, &text),
            Token::OrderedListItem(text) => self.list_item(Open::OrderedList, &text),
            Token::BlankLine => self.close_top(),
            Token::Text(text) => {
                if self.stack.is_empty() {
                    self.open(Open::Paragraph)?;
                }
                self.write(&text)
            }
            Token::Malformed(err) => {
                log::debug!("malformed token: {err}");
                self.diagnostics.push(Diagnostic::Malformed(err));
                Ok(())
            }
            Token::EndOfInput => Ok(()),
        }
    }

    /// Closes every open element, writes the epilogue and flushes.
    pub fn finish(mut self) -> io::Result<(W, Vec<Diagnostic>)> {
        self.close_all()?;
        self.write(html::DOCUMENT_EPILOGUE)?;
        self.out.flush()?;
        Ok((self.out, self.diagnostics))
    }

    fn list_item(&mut self, list: Open, text: &str) -> io::Result<()> {
        if self.stack.top() != Some(list) {
            self.close_all()?;
            self.open(list)?;
        }
        self.write(html::LIST_ITEM_OPEN)?;
        self.write(text)?;
        self.write(html::LIST_ITEM_CLOSE)
    }

    /// Opens `span` if it is not open, otherwise closes it. Spans opened
    /// after it are closed first and reopened afterwards so tags stay nested.
    fn toggle(&mut self, span: Open) -> io::Result<()> {
        if !self.stack.contains(span) {
            return self.open(span);
        }

        let mut reopen = Vec::new();
        while let Some(top) = self.stack.pop() {
            self.write(top.close_tag())?;
            if top == span {
                break;
            }
            reopen.push(top);
        }
        for open in reopen.into_iter().rev() {
            self.open(open)?;
        }
        Ok(())
    }

    fn open(&mut self, open: Open) -> io::Result<()> {
        log::debug!("open <{}>", open.tag_name());
        self.stack.push(open);
        self.write(open.open_tag())
    }

    fn close_top(&mut self) -> io::Result<()> {
        match self.stack.pop() {
            Some(open) => self.close(open),
            None => Ok(()),
        }
    }

    fn close_all(&mut self) -> io::Result<()> {
        while let Some(open) = self.stack.pop() {
            self.close(open)?;
        }
        Ok(())
    }

    /// Writes the closing tag of an entry already popped off the stack. A
    /// span closed this way never saw its own marker.
    fn close(&mut self, open: Open) -> io::Result<()> {
        log::debug!("close <{}>", open.tag_name());
        if open.is_span() {
            self.diagnostics.push(Diagnostic::UnclosedSpan { span: open });
        }
        self.write(open.close_tag())
    }

    fn write(&mut self, fragment: &str) -> io::Result<()> {
        self.out.write_all(fragment.as_bytes())
    }
}
