//! Logos-based lexer for hostfile text
//!
//! Fast tokenization using the logos crate. Whitespace and `#` comments are
//! skipped; newlines are real tokens because the grammar is line-oriented.

use logos::Logos;

/// A token with its kind, text, and 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: u32,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            line: 1,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };
        let token = Token {
            kind,
            text: self.inner.slice(),
            line: self.line,
        };
        if kind == TokenKind::Newline {
            self.line += 1;
        }
        Some(token)
    }
}

/// Token kinds the parser consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Newline,
    Eq,
    /// `count`, a slot-count synonym
    CountKw,
    /// `cpu`, a slot-count synonym
    CpuKw,
    /// `slots`, a slot-count synonym
    SlotsKw,
    /// `slots_max`, the slot cap
    SlotsMaxKw,
    Integer,
    /// A host name; may contain dots and dashes (node0.rack-1)
    Ident,
    /// Input logos could not match
    Error,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
enum LogosToken {
    #[token("\n")]
    Newline,

    #[token("=")]
    Eq,

    // Keywords are case-sensitive; an identifier that merely starts with
    // one still lexes as Ident via longest match.
    #[token("count")]
    CountKw,

    #[token("cpu")]
    CpuKw,

    #[token("slots")]
    SlotsKw,

    #[token("slots_max")]
    SlotsMaxKw,

    #[regex(r"[0-9]+", priority = 3)]
    Integer,

    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_.\-]*", priority = 2)]
    Ident,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Newline => TokenKind::Newline,
            LogosToken::Eq => TokenKind::Eq,
            LogosToken::CountKw => TokenKind::CountKw,
            LogosToken::CpuKw => TokenKind::CpuKw,
            LogosToken::SlotsKw => TokenKind::SlotsKw,
            LogosToken::SlotsMaxKw => TokenKind::SlotsMaxKw,
            LogosToken::Integer => TokenKind::Integer,
            LogosToken::Ident => TokenKind::Ident,
        }
    }
}
