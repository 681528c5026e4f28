//! # markdown-lite-engine
//!
//! Turns the token stream from [`markdown_lite_syntax`] into an HTML
//! document.
//!
//! ```text
//! Source → Scanner → Tokens → Emitter (+ OpenStack) → HTML
//! ```
//!
//! ```
//! let rendered = markdown_lite_engine::to_html("hello world\n\n").unwrap();
//! assert_eq!(
//!     rendered.html,
//!     "<html>\n<body>\n<p>\nhello world\n</p>\n</body>\n</html>\n"
//! );
//! assert!(rendered.diagnostics.is_empty());
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod html;
pub mod io;
pub mod stack;

#[cfg(test)]
pub mod tests;

use std::io::Write;

use markdown_lite_syntax::{Scanner, Token};

pub use diagnostic::{ConvertError, Diagnostic};
pub use emitter::Emitter;
pub use stack::{Open, OpenStack};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Tokens processed, not counting the final end of input.
    pub tokens: usize,
    /// Tokens that came back malformed.
    pub malformed: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// An in-memory conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts a whole document, writing the HTML to `out`.
///
/// Problems in the input are reported in the returned [`Report`]; only a
/// failing writer makes this return an error.
pub fn convert<W: Write>(input: &str, out: W) -> Result<Report, ConvertError> {
    let mut emitter = Emitter::new(out);
    let mut report = Report::default();

    emitter.begin()?;
    for token in Scanner::new(input) {
        report.tokens += 1;
        if matches!(token, Token::Malformed(_)) {
            report.malformed += 1;
        }
        emitter.emit(token)?;
    }
    let (_, diagnostics) = emitter.finish()?;

    log::debug!(
        "converted {} tokens ({} malformed, {} diagnostics)",
        report.tokens,
        report.malformed,
        diagnostics.len()
    );
    report.diagnostics = diagnostics;
    Ok(report)
}

/// Converts a whole document into a `String`.
pub fn to_html(input: &str) -> Result<Rendered, ConvertError> {
    let mut buf = Vec::with_capacity(input.len() + 64);
    let report = convert(input, &mut buf)?;
    Ok(Rendered {
        html: String::from_utf8(buf)?,
        diagnostics: report.diagnostics,
    })
}
