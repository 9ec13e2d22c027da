use crate::error::ParseError;

use super::{
    lexer::{TokenIter, TokenKind},
    Node,
};

type Span = logos::Span;

/// A list that has been opened but not yet closed.
struct Frame<'a> {
    open: Span,
    children: Vec<Node<'a>>,
}

/// Builds the tree with an explicit stack so nesting depth is bounded by
/// memory rather than by the call stack.
pub(super) struct Parser<'a> {
    input: &'a str,
    root: Vec<Node<'a>>,
    open: Vec<Frame<'a>>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            input,
            root: Vec::new(),
            open: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Vec<Node<'a>> {
        match self.open.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn close(&mut self, at: Span) -> Result<(), ParseError> {
        let Some(frame) = self.open.pop() else {
            return Err(ParseError::UnexpectedClose { at });
        };
        let list = Node::List(frame.children.into_boxed_slice());
        self.current().push(list);
        Ok(())
    }

    pub(super) fn parse(mut self) -> Result<Node<'a>, ParseError> {
        for token in TokenIter::new(self.input) {
            match token.kind {
                TokenKind::LParen => self.open.push(Frame {
                    open: token.span,
                    children: Vec::new(),
                }),
                TokenKind::RParen => self.close(token.span)?,
                TokenKind::Atom => {
                    let atom = Node::Atom(&self.input[token.span]);
                    self.current().push(atom);
                }
                TokenKind::Error => {
                    return Err(ParseError::UnterminatedString { at: token.span });
                }
            }
        }

        if let Some(frame) = self.open.pop() {
            return Err(ParseError::Unterminated {
                depth: self.open.len() + 1,
                at: frame.open,
            });
        }

        if self.root.len() > 1 {
            log::debug!(
                "ignoring {} trailing top-level element(s)",
                self.root.len() - 1
            );
        }

        Ok(self
            .root
            .into_iter()
            .next()
            .unwrap_or_else(|| Node::List(Box::default())))
    }
}

impl<'a> TryFrom<&'a str> for Node<'a> {
    type Error = ParseError;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        Parser::new(input).parse()
    }
}
