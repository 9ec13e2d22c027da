//! Net entries read straight off the tree, before any filtering.

use crate::sexpr::Node as SExpr;

/// A node connects a net to a pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    pub ref_des: Option<&'a str>,
    pub num: Option<&'a str>,
    pub function: Option<&'a str>,
    pub typ: Option<&'a str>,
}

/// A net
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net<'a> {
    /// A unique id for the net
    pub code: Option<&'a str>,
    pub name: Option<&'a str>,
    pub nodes: Vec<Node<'a>>,
}

impl<'a> From<&SExpr<'a>> for Node<'a> {
    fn from(node: &SExpr<'a>) -> Self {
        Node {
            ref_des: node.property_str("ref"),
            num: node.property_str("pin"),
            function: node.property_str("pinfunction"),
            typ: node.property_str("pintype"),
        }
    }
}

impl<'a> From<&SExpr<'a>> for Net<'a> {
    fn from(net: &SExpr<'a>) -> Self {
        Net {
            code: net.property_str("code"),
            name: net.property_str("name"),
            nodes: net.children("node").map(Node::from).collect(),
        }
    }
}

/// The `net` lists of a document. They normally live in a `nets` container;
/// documents without one are searched for bare top-level `net` lists
/// instead. The two shapes are never merged.
pub fn net_lists<'a, 'b>(root: &'b SExpr<'a>) -> Vec<&'b SExpr<'a>> {
    let bare = root.children("net");
    let Some(container) = root.find_named("nets") else {
        log::debug!("no `nets` container, falling back to top-level `net` lists");
        return bare.collect();
    };
    let ignored = bare.count();
    if ignored > 0 {
        log::warn!("ignoring {ignored} top-level `net` list(s) outside the `nets` container");
    }
    container.children("net").collect()
}

/// Every net of the document, in document order
pub fn nets<'a>(root: &SExpr<'a>) -> Vec<Net<'a>> {
    net_lists(root).into_iter().map(Net::from).collect()
}
