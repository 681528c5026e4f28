use markdown_lite_syntax::ScanError;
use thiserror::Error;

use crate::stack::Open;

/// A non-fatal problem found while converting a document.
///
/// None of these stop conversion; the HTML is still produced as far as the
/// input allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("bad token: {0}")]
    Malformed(#[from] ScanError),

    /// An emphasis span was still open when its block ended. It is closed
    /// with its matching tag.
    #[error("unclosed <{}> span closed at end of block", .span.tag_name())]
    UnclosedSpan { span: Open },
}

/// Failure to produce the HTML output at all.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to write HTML output: {0}")]
    Write(#[from] std::io::Error),

    #[error("HTML output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
