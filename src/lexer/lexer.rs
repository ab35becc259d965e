use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_TOKEN};

use super::{
    cursor::SourceCursor,
    tokens::{Token, TokenKind, TokenLog, RESERVED_LOOKUP},
};

/// Scans one token starting at `cursor`.
///
/// Returns the token together with the cursor positioned just past it. At end
/// of input this keeps returning `EndOfInput` at the final position. On error
/// nothing is consumed from the caller's point of view, since the caller still
/// holds the cursor it passed in.
pub fn scan(cursor: SourceCursor<'_>) -> Result<(Token, SourceCursor<'_>), Error> {
    let mut lex = cursor;
    skip_trivia(&mut lex);

    let start = lex.position().next_column();
    let start_offset = lex.offset();

    let first = match lex.advance() {
        Some(first) => first,
        None => return Ok((Token::end_of_input(lex.position()), lex)),
    };

    let kind = match first {
        c if is_ident_start(c) => {
            lex.advance_while(is_ident_continue);
            TokenKind::Identifier
        }
        c if c.is_ascii_digit() => {
            lex.advance_while(|c| c.is_ascii_digit());
            TokenKind::Integer
        }
        '=' | '!' | '<' | '>' => {
            if lex.peek() == Some('=') {
                lex.advance();
                TokenKind::Operator
            } else if first == '<' || first == '>' {
                TokenKind::Operator
            } else {
                debug!("lone {:?} at {}:{}", first, start.line, start.column);
                return Err(Error::new(ErrorImpl::LoneOperator { character: first }, start));
            }
        }
        ':' => {
            if lex.peek() == Some('=') {
                lex.advance();
                TokenKind::AssignOp
            } else {
                TokenKind::Delimiter
            }
        }
        '+' | '-' | '*' | '/' => TokenKind::Operator,
        '(' | ')' | '{' | '}' | ';' | ',' => TokenKind::Delimiter,
        character => {
            debug!("unrecognised {:?} at {}:{}", character, start.line, start.column);
            return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character }, start));
        }
    };

    let text = lex.lexeme_since(start_offset);
    let kind = if kind == TokenKind::Identifier && RESERVED_LOOKUP.contains(text.as_str()) {
        TokenKind::Keyword
    } else {
        kind
    };

    let token = MK_TOKEN!(kind, text, start);
    trace!("scanned {}", token);
    Ok((token, lex))
}

/// Skips whitespace and `#` comments. The newline ending a comment is left
/// for the whitespace arm.
fn skip_trivia(lex: &mut SourceCursor<'_>) {
    loop {
        match lex.peek() {
            Some(' ' | '\t' | '\r' | '\n') => {
                lex.advance();
            }
            Some('#') => {
                lex.advance();
                lex.advance_while(|c| c != '\n');
            }
            _ => break,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Pulls tokens out of a source one at a time.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    cursor: SourceCursor<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Scanner {
            cursor: SourceCursor::new(source),
        }
    }

    pub fn next(&mut self) -> Result<Token, Error> {
        let (token, cursor) = scan(self.cursor)?;
        self.cursor = cursor;
        Ok(token)
    }

    /// Like `next`, but also records the token in `log`.
    pub fn next_logged(&mut self, log: &mut TokenLog) -> Result<Token, Error> {
        let token = self.next()?;
        log.push(token.clone());
        Ok(token)
    }

    /// Scans up to and including `EndOfInput`, recording every token.
    pub fn tokenize_into(&mut self, log: &mut TokenLog) -> Result<(), Error> {
        loop {
            if self.next_logged(log)?.is_end_of_input() {
                debug!("reached end of input after {} tokens", log.len());
                return Ok(());
            }
        }
    }

    pub fn position(&self) -> crate::Position {
        self.cursor.position()
    }

    /// True once only trivia is left, i.e. `next` would return `EndOfInput`.
    pub fn is_finished(&self) -> bool {
        let mut probe = self.cursor;
        skip_trivia(&mut probe);
        probe.at_eof()
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut log = TokenLog::new();
    Scanner::new(source.as_bytes()).tokenize_into(&mut log)?;

    Ok(log.iter().cloned().collect())
}
