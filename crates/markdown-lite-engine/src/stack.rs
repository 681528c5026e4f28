use crate::html;

/// An element that stays open across tokens until something closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Open {
    Paragraph,
    UnorderedList,
    OrderedList,
    Bold,
    Italic,
}

impl Open {
    /// Block elements never nest; inline spans live inside at most one block.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Open::Paragraph | Open::UnorderedList | Open::OrderedList
        )
    }

    pub fn is_span(self) -> bool {
        !self.is_block()
    }

    pub fn tag_name(self) -> &'static str {
        match self {
            Open::Paragraph => "p",
            Open::UnorderedList => "ul",
            Open::OrderedList => "ol",
            Open::Bold => "strong",
            Open::Italic => "em",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Open::Paragraph => html::PARAGRAPH_OPEN,
            Open::UnorderedList => html::UNORDERED_LIST_OPEN,
            Open::OrderedList => html::ORDERED_LIST_OPEN,
            Open::Bold => html::STRONG_OPEN,
            Open::Italic => html::EM_OPEN,
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Open::Paragraph => html::PARAGRAPH_CLOSE,
            Open::UnorderedList => html::UNORDERED_LIST_CLOSE,
            Open::OrderedList => html::ORDERED_LIST_CLOSE,
            Open::Bold => html::STRONG_CLOSE,
            Open::Italic => html::EM_CLOSE,
        }
    }
}

/// LIFO stack of open elements, owned by a single emitter.
///
/// The emitter keeps the shape `[block?, span*]`: at most one block, always
/// at the bottom, with at most one span of each kind above it.
#[derive(Debug, Default, Clone)]
pub struct OpenStack(Vec<Open>);

impl OpenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, open: Open) {
        debug_assert!(
            !self.contains(open),
            "{open:?} is already open in {:?}",
            self.0
        );
        self.0.push(open);
    }

    pub fn pop(&mut self) -> Option<Open> {
        self.0.pop()
    }

    pub fn top(&self) -> Option<Open> {
        self.0.last().copied()
    }

    pub fn contains(&self, open: Open) -> bool {
        self.0.contains(&open)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The open entries, bottom first.
    pub fn as_slice(&self) -> &[Open] {
        &self.0
    }
}
