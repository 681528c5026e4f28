use std::iter::Peekable;

/// A cursor for character-by-character scanning with one character of
/// lookahead and a single pushback slot.
///
/// End of input is reported as `None` rather than a sentinel character, so
/// every `char` value in the source stays a valid input.
#[derive(Debug, Clone)]
pub struct Cursor<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    /// A character handed back with [`Cursor::push_back`], read before `chars`.
    pushed_back: Option<char>,
    /// 1-based line of the next character to be read.
    line: usize,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Creates a cursor positioned before the first character of `chars`.
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            pushed_back: None,
            line: 1,
        }
    }

    /// Returns the line number of the next unread character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Peeks at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        match self.pushed_back {
            Some(c) => Some(c),
            None => self.chars.peek().copied(),
        }
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = match self.pushed_back.take() {
            Some(c) => c,
            None => self.chars.next()?,
        };
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn bump_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Hands a consumed character back so the next read returns it again.
    ///
    /// Only one character may be pending at a time.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(
            self.pushed_back.is_none(),
            "pushback slot already holds {:?}",
            self.pushed_back
        );
        if c == '\n' {
            self.line -= 1;
        }
        self.pushed_back = Some(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello".chars());
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.peek(), Some('e'));
    }

    #[test]
    fn empty_input() {
        let mut cur = Cursor::new("".chars());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.line(), 1);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x".chars());
        assert_eq!(cur.bump(), Some('x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }

    #[test]
    fn pushed_back_character_is_read_first() {
        let mut cur = Cursor::new("ab".chars());
        let a = cur.bump().unwrap();
        cur.push_back(a);
        assert_eq!(cur.peek(), Some('a'));
        assert_eq!(cur.bump(), Some('a'));
        assert_eq!(cur.bump(), Some('b'));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn push_back_at_eof_revives_input() {
        let mut cur = Cursor::new("z".chars());
        assert_eq!(cur.bump(), Some('z'));
        assert_eq!(cur.peek(), None);
        cur.push_back('z');
        assert!(cur.peek().is_some());
        assert_eq!(cur.bump(), Some('z'));
    }

    #[test]
    fn bump_if_only_consumes_on_match() {
        let mut cur = Cursor::new("**x".chars());
        assert!(cur.bump_if('*'));
        assert!(cur.bump_if('*'));
        assert!(!cur.bump_if('*'));
        assert_eq!(cur.peek(), Some('x'));
    }

    #[test]
    fn tracks_lines_through_pushback() {
        let mut cur = Cursor::new("a\nb\n".chars());
        assert_eq!(cur.line(), 1);
        cur.bump();
        cur.bump();
        assert_eq!(cur.line(), 2);
        cur.push_back('\n');
        assert_eq!(cur.line(), 1);
        cur.bump();
        cur.bump();
        cur.bump();
        assert_eq!(cur.line(), 3);
    }

    #[test]
    fn multibyte_characters_are_single_units() {
        let mut cur = Cursor::new("é*".chars());
        assert_eq!(cur.bump(), Some('é'));
        assert_eq!(cur.peek(), Some('*'));
    }
}
