//! Character sources for the tokenizers.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! A tokenizer never touches bytes. It pulls already-decoded scalar values
//! from a [`CharacterSource`], which also tracks where in the document each
//! value came from so that parse errors can be reported with a position.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based line/column location in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Create a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the character following `c` when `c` sits at `self`.
    #[must_use]
    pub const fn after(self, c: char) -> Self {
        if c == '\n' {
            Self::new(self.line + 1, 1)
        } else {
            Self::new(self.line, self.column + 1)
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A stream of Unicode scalar values consumed one at a time by a tokenizer.
///
/// "The next input character is the first character in the input stream that
/// has not yet been consumed or explicitly ignored."
pub trait CharacterSource {
    /// "Consume the next input character."
    ///
    /// Returns `None` once the input is exhausted (the EOF marker). If a
    /// reconsume is armed, the current input character is delivered again and
    /// the position does not move.
    fn next(&mut self) -> Option<char>;

    /// "Reconsume in the X state."
    ///
    /// Arms a single slot so the following [`CharacterSource::next`] returns
    /// the current input character again.
    fn reconsume(&mut self);

    /// True once every character has been delivered and no reconsume is armed.
    fn reached_end(&self) -> bool;

    /// Position of the current input character (the last one returned).
    fn position(&self) -> Position;

    /// Peek at the character `n` places past the current one without
    /// consuming anything. `lookahead(0)` is what [`CharacterSource::next`]
    /// would return.
    fn lookahead(&self, n: usize) -> Option<char>;

    /// Consume `n` characters, discarding them.
    fn advance(&mut self, n: usize);
}

/// An in-memory [`CharacterSource`] over a string.
///
/// Newlines are normalized on construction: "replace every U+000D CR U+000A LF
/// code point pair with a single U+000A LF code point, then replace every
/// remaining U+000D CR code point with a U+000A LF code point."
#[derive(Debug, Clone)]
pub struct StrSource {
    chars: Vec<char>,
    /// Index of the next unread character.
    index: usize,
    current: Option<char>,
    position: Position,
    next_position: Position,
    reconsume: bool,
}

impl StrSource {
    /// Create a source for the given input, normalizing newlines.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut chars = Vec::with_capacity(input.len());
        let mut iter = input.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\r' {
                if iter.peek() == Some(&'\n') {
                    let _ = iter.next();
                }
                chars.push('\n');
            } else {
                chars.push(c);
            }
        }

        Self {
            chars,
            index: 0,
            current: None,
            position: Position::default(),
            next_position: Position::default(),
            reconsume: false,
        }
    }

    /// Number of characters not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.index
    }
}

impl From<&str> for StrSource {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl CharacterSource for StrSource {
    fn next(&mut self) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
            return self.current;
        }

        self.position = self.next_position;
        self.current = self.chars.get(self.index).copied();
        if let Some(c) = self.current {
            self.index += 1;
            self.next_position = self.next_position.after(c);
        }
        self.current
    }

    fn reconsume(&mut self) {
        self.reconsume = true;
    }

    fn reached_end(&self) -> bool {
        !self.reconsume && self.index >= self.chars.len()
    }

    fn position(&self) -> Position {
        self.position
    }

    fn lookahead(&self, n: usize) -> Option<char> {
        if self.reconsume {
            if n == 0 {
                return self.current;
            }
            return self.chars.get(self.index + n - 1).copied();
        }
        self.chars.get(self.index + n).copied()
    }

    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_advance_across_lines() {
        let mut source = StrSource::new("ab\nc");
        assert_eq!(source.next(), Some('a'));
        assert_eq!(source.position(), Position::new(1, 1));
        assert_eq!(source.next(), Some('b'));
        assert_eq!(source.position(), Position::new(1, 2));
        assert_eq!(source.next(), Some('\n'));
        assert_eq!(source.position(), Position::new(1, 3));
        assert_eq!(source.next(), Some('c'));
        assert_eq!(source.position(), Position::new(2, 1));
        assert_eq!(source.next(), None);
        assert_eq!(source.position(), Position::new(2, 2));
        assert!(source.reached_end());
    }

    #[test]
    fn test_reconsume_redelivers_without_moving() {
        let mut source = StrSource::new("xy");
        assert_eq!(source.next(), Some('x'));
        source.reconsume();
        assert_eq!(source.lookahead(0), Some('x'));
        assert_eq!(source.lookahead(1), Some('y'));
        assert_eq!(source.next(), Some('x'));
        assert_eq!(source.position(), Position::new(1, 1));
        assert_eq!(source.next(), Some('y'));
    }

    #[test]
    fn test_reconsume_at_end_redelivers_eof() {
        let mut source = StrSource::new("");
        assert_eq!(source.next(), None);
        source.reconsume();
        assert!(!source.reached_end());
        assert_eq!(source.next(), None);
        assert!(source.reached_end());
    }

    #[test]
    fn test_newline_normalization() {
        let mut source = StrSource::new("a\r\nb\rc");
        let collected: String = core::iter::from_fn(|| source.next()).collect();
        assert_eq!(collected, "a\nb\nc");
    }

    #[test]
    fn test_lookahead_and_advance() {
        let mut source = StrSource::new("<!--x");
        assert_eq!(source.next(), Some('<'));
        assert_eq!(source.lookahead(0), Some('!'));
        assert_eq!(source.lookahead(2), Some('-'));
        assert_eq!(source.lookahead(9), None);
        source.advance(3);
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next(), Some('x'));
        assert_eq!(source.position(), Position::new(1, 5));
    }
}
