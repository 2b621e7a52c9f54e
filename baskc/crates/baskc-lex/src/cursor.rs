//! Character cursor for traversing source code.
//!
//! The cursor owns the character buffer the scanner walks. The buffer starts
//! with one synthetic `'\n'` so that a line number on the very first line is
//! seen right after a newline, like every other line number. The synthetic
//! character has no width: byte offsets, lines, and columns reported by the
//! cursor always refer to the text the caller handed in.

use baskc_util::Span;

/// A cursor over the scanner's character buffer.
///
/// `position` is the index of [`current_char`](Self::current_char) and
/// `read_position` is always `position + 1`. Past the end of the buffer the
/// current character is `None`, and advancing further is a no-op.
///
/// # Example
///
/// ```
/// use baskc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("10");
/// assert_eq!(cursor.current_char(), Some('\n'));
/// cursor.read_char();
/// assert_eq!(cursor.current_char(), Some('1'));
/// assert_eq!(cursor.peek_char(), Some('0'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Input characters, synthetic newline first.
    chars: Vec<char>,

    /// Index of the current character.
    position: usize,

    /// Index of the lookahead character.
    read_position: usize,

    /// Character at `position`, `None` past the end.
    current: Option<char>,

    /// Byte offset of the current character in the original source.
    byte_offset: usize,

    /// Line of the current character (1-based).
    line: u32,

    /// Column of the current character (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a cursor resting on the synthetic leading newline.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = std::iter::once('\n').chain(source.chars()).collect();
        let current = chars.first().copied();
        Self {
            chars,
            position: 0,
            read_position: 1,
            current,
            byte_offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves one character forward.
    ///
    /// Does nothing once the cursor is past the end, so the end of input can
    /// be observed any number of times.
    pub fn read_char(&mut self) {
        let Some(leaving) = self.current else {
            return;
        };

        if self.position > 0 {
            self.byte_offset += leaving.len_utf8();
            if leaving == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.position = self.read_position;
        self.current = self.chars.get(self.position).copied();
        self.read_position += 1;
    }

    /// The character under the cursor, `None` past the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    /// The character after the current one, `None` past the end.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }

    /// Index of the current character in the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the lookahead character in the buffer.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Byte offset of the current character in the original source.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Line of the current character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Zero-width span at the current character.
    #[inline]
    pub fn here(&self) -> Span {
        Span::point(self.byte_offset, self.line, self.column)
    }

    /// Returns true once the cursor has moved past the last character.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Appends lookahead characters to `buf` while `predicate` accepts them,
    /// leaving the cursor on the last character taken.
    pub fn eat_while<F>(&mut self, buf: &mut String, mut predicate: F)
    where
        F: FnMut(char) -> bool,
    {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }
            self.read_char();
            buf.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_synthetic_newline() {
        let cursor = Cursor::new("A");
        assert_eq!(cursor.current_char(), Some('\n'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
        assert_eq!(cursor.here(), Span::point(0, 1, 1));
    }

    #[test]
    fn test_synthetic_newline_has_no_width() {
        let mut cursor = Cursor::new("AB");
        cursor.read_char();
        assert_eq!(cursor.current_char(), Some('A'));
        assert_eq!(cursor.byte_offset(), 0);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.read_char();
        assert_eq!(cursor.byte_offset(), 1);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_read_position_stays_one_ahead() {
        let mut cursor = Cursor::new("abc");
        for _ in 0..10 {
            assert_eq!(cursor.read_position(), cursor.position() + 1);
            cursor.read_char();
        }
    }

    #[test]
    fn test_end_is_sticky() {
        let mut cursor = Cursor::new("x");
        cursor.read_char();
        cursor.read_char();
        assert!(cursor.is_at_end());
        let offset = cursor.byte_offset();
        let position = cursor.position();
        cursor.read_char();
        cursor.read_char();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.byte_offset(), offset);
        assert_eq!(cursor.position(), position);
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nb");
        cursor.read_char(); // a
        cursor.read_char(); // \n
        cursor.read_char(); // b
        assert_eq!(cursor.current_char(), Some('b'));
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.byte_offset(), 2);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut cursor = Cursor::new("é!");
        cursor.read_char();
        cursor.read_char();
        assert_eq!(cursor.current_char(), Some('!'));
        assert_eq!(cursor.byte_offset(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("123ab");
        cursor.read_char();
        let mut buf = String::from('1');
        cursor.eat_while(&mut buf, |c| c.is_ascii_digit());
        assert_eq!(buf, "123");
        assert_eq!(cursor.current_char(), Some('3'));
    }
}
