use logos::{Logos, SpannedIter};

pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) span: logos::Span,
}

pub(super) struct TokenIter<'a> {
    iter: SpannedIter<'a, LogosTokenKind>,
}

impl<'a> TokenIter<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: LogosTokenKind::lexer(input).spanned(),
        }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, span) = match self.iter.next()? {
            // Only the enclosing quotes are dropped, escapes stay as written
            (Ok(LogosTokenKind::QuotedString), span) => {
                (TokenKind::Atom, (span.start + 1)..(span.end - 1))
            }
            (Ok(LogosTokenKind::LParen), span) => (TokenKind::LParen, span),
            (Ok(LogosTokenKind::RParen), span) => (TokenKind::RParen, span),
            (Ok(LogosTokenKind::Atom), span) => (TokenKind::Atom, span),
            (Err(_), span) => (TokenKind::Error, span),
        };
        Some(Token { kind, span })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TokenKind {
    LParen,
    RParen,
    Atom,
    Error,
}

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum LogosTokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    QuotedString,
    #[regex(r#"[^"()\s]+"#)]
    Atom,
}
