use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display, io};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("func");
        set.insert("var");
        set.insert("let");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("print");
        set.insert("return");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Integer,
    AssignOp, // :=
    Operator,
    Delimiter,
    EndOfInput,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Integer => "Integer",
            TokenKind::AssignOp => "AssignOp",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}('{}') at {}:{}",
            self.kind, self.text, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn end_of_input(position: Position) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            position,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Append-only record of the tokens handed out so far, in source order.
#[derive(Debug, Clone, Default)]
pub struct TokenLog {
    tokens: Vec<Token>,
}

impl TokenLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Writes every logged token on its own line.
    pub fn print(&self, out: &mut impl io::Write) -> io::Result<()> {
        for token in &self.tokens {
            writeln!(out, "{}", token)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenLog {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
