//! Fixed HTML fragments written by the emitter.

// Document framing
pub const DOCUMENT_PROLOGUE: &str = "<html>\n<body>\n";
pub const DOCUMENT_EPILOGUE: &str = "</body>\n</html>\n";

// Block elements
pub const PARAGRAPH_OPEN: &str = "<p>\n";
pub const PARAGRAPH_CLOSE: &str = "\n</p>\n";
pub const UNORDERED_LIST_OPEN: &str = "<ul>\n";
pub const UNORDERED_LIST_CLOSE: &str = "</ul>\n";
pub const ORDERED_LIST_OPEN: &str = "<ol>\n";
pub const ORDERED_LIST_CLOSE: &str = "</ol>\n";
pub const LIST_ITEM_OPEN: &str = "<li>";
pub const LIST_ITEM_CLOSE: &str = "</li>\n";
pub const HEADING_OPEN: &str = "<h1>";
pub const HEADING_CLOSE: &str = "</h1>\n";

// Inline elements
pub const STRONG_OPEN: &str = "<strong>";
pub const STRONG_CLOSE: &str = "</strong>";
pub const EM_OPEN: &str = "<em>";
pub const EM_CLOSE: &str = "</em>";
