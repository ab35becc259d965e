use crate::Position;

/// A read position over the source bytes.
///
/// The cursor is a plain value: the scanner takes one in and hands back the
/// advanced copy, so a caller holding an older cursor still sees the old state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCursor<'src> {
    source: &'src [u8],
    offset: usize,
    position: Position,
}

impl<'src> SourceCursor<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        SourceCursor {
            source,
            offset: 0,
            position: Position::start(),
        }
    }

    /// The next unconsumed character, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.offset).map(|byte| *byte as char)
    }

    /// Consumes one character. This is the only place the position moves.
    pub fn advance(&mut self) -> Option<char> {
        let current = self.peek()?;
        self.offset += 1;

        if current == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }

        Some(current)
    }

    /// Consumes characters for as long as `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Everything consumed since `start`, one character per byte.
    pub fn lexeme_since(&self, start: usize) -> String {
        self.source[start..self.offset]
            .iter()
            .map(|x| *x as char)
            .collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut cursor = SourceCursor::new(b"ab\nc");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.position(), Position { line: 1, column: 0 });

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position { line: 1, column: 2 });

        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.position(), Position { line: 2, column: 0 });

        assert_eq!(cursor.advance(), Some('c'));
        assert!(cursor.at_eof());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position { line: 2, column: 1 });
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = SourceCursor::new(b"x");

        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_lexeme_since() {
        let mut cursor = SourceCursor::new(b"  count1 ");
        cursor.advance_while(|c| c == ' ');
        let start = cursor.offset();
        cursor.advance_while(|c| c.is_ascii_alphanumeric());

        assert_eq!(cursor.lexeme_since(start), "count1");
        assert_eq!(cursor.peek(), Some(' '));
    }
}
