use std::fmt::Display;

use crate::error::ParseError;

mod lexer;
mod parser;

/// A parsed S-expression. Atoms borrow from the input text; quoted atoms
/// have their enclosing quotes removed but keep escape sequences verbatim.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node<'a> {
    Atom(&'a str),
    List(Box<[Node<'a>]>),
}

impl<'a> Display for Node<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Node::Atom(s) if needs_quotes(s) => write!(f, "\"{}\"", s),
            Node::Atom(s) => write!(f, "{}", s),
        }
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\\'))
}

// Dropping a deeply nested tree recursively would exhaust the call stack,
// so nested lists are flattened onto a heap worklist instead.
impl<'a> Drop for Node<'a> {
    fn drop(&mut self) {
        let Node::List(children) = self else {
            return;
        };
        if children.iter().all(|child| matches!(child, Node::Atom(_))) {
            return;
        }
        let mut pending = vec![std::mem::take(children)];
        while let Some(list) = pending.pop() {
            for mut child in list.into_vec() {
                if let Node::List(grandchildren) = &mut child {
                    pending.push(std::mem::take(grandchildren));
                }
            }
        }
    }
}

impl<'a> Node<'a> {
    /// Parse a whole document. Blank input yields an empty list.
    pub fn parse(input: &'a str) -> Result<Self, ParseError> {
        Node::try_from(input)
    }

    pub fn as_atom(&self) -> Option<&'a str> {
        match self {
            Node::Atom(s) => Some(*s),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node<'a>]> {
        match self {
            Node::Atom(_) => None,
            Node::List(children) => Some(&children[..]),
        }
    }

    /// The leading atom of a list, which names its role by convention
    pub fn label(&self) -> Option<&'a str> {
        match self {
            Node::List(children) => children.first().and_then(Node::as_atom),
            Node::Atom(_) => None,
        }
    }

    /// First direct child list labelled `name`
    pub fn find_named(&self, name: &str) -> Option<&Node<'a>> {
        self.children(name).next()
    }

    /// Follow a chain of [`find_named`](Self::find_named) lookups, giving up
    /// at the first missing link.
    pub fn find_path(&self, path: &[&str]) -> Option<&Node<'a>> {
        path.iter()
            .try_fold(self, |node, name| node.find_named(name))
    }

    /// Second element of the first direct child list labelled `name` that
    /// has at least two elements.
    pub fn get_property(&self, name: &str) -> Option<&Node<'a>> {
        self.children(name)
            .find_map(|child| match child {
                Node::List(items) if items.len() >= 2 => Some(&items[1]),
                _ => None,
            })
    }

    /// [`get_property`](Self::get_property), when the value is an atom
    pub fn property_str(&self, name: &str) -> Option<&'a str> {
        self.get_property(name).and_then(Node::as_atom)
    }

    pub fn children<'b, 'c>(&'b self, label: &'c str) -> LabeledChildIterator<'a, 'b, 'c> {
        let iter = match self {
            Node::Atom(_) => None,
            Node::List(children) => Some(children.iter()),
        };
        LabeledChildIterator { iter, label }
    }
}

#[derive(Debug)]
pub struct LabeledChildIterator<'a, 'b, 'c> {
    iter: Option<std::slice::Iter<'b, Node<'a>>>,
    label: &'c str,
}

impl<'a, 'b, 'c> Iterator for LabeledChildIterator<'a, 'b, 'c> {
    type Item = &'b Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.label;
        let iter = self.iter.as_mut()?;
        iter.find(|child| child.label() == Some(label))
    }
}

impl<'a> TryFrom<&'a String> for Node<'a> {
    type Error = ParseError;

    fn try_from(input: &'a String) -> Result<Self, Self::Error> {
        Node::try_from(input.as_str())
    }
}
