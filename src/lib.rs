//! Per-component pinouts from KiCad 9 netlists.
//!
//! A [`Netlist`] is checked for its generator version, parsed into a tree of
//! [`Node`]s, and then queried for one component at a time:
//!
//! ```
//! use kicad_pinout::{Netlist, PinFilter};
//!
//! let input = r#"(export (version "E")
//!   (design (tool "Eeschema 9.0.1"))
//!   (components (comp (ref "R1") (value "10k")))
//!   (nets (net (code "1") (name "/LED")
//!     (node (ref "R1") (pin "1") (pintype "passive")))))"#;
//!
//! let netlist = Netlist::parse(input)?;
//! let r1 = netlist.find_component("R1", &PinFilter::default())?;
//! assert_eq!(r1.value, Some("10k"));
//! assert_eq!(r1.pins[0].net_leaf(), "LED");
//! # Ok::<(), kicad_pinout::Error>(())
//! ```

use std::fmt::Display;

pub mod error;
pub mod locate;
pub mod order;
pub mod pins;
pub mod raw;
pub mod render;
pub mod sexpr;
pub mod version;

pub use error::{Error, ParseError, VersionError};
pub use pins::{PinFilter, PinType};
pub use sexpr::Node;

/// Reference designator, e.g. `U1`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RefDes<'a>(pub &'a str);

impl<'a> Display for RefDes<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Pin number as written in the netlist, e.g. `1` or `A10`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PinNum<'a>(pub &'a str);

impl<'a> Display for PinNum<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A pin of a located component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin<'a> {
    pub num: PinNum<'a>,
    /// The pin function, empty when the netlist has none
    pub name: &'a str,
    /// Full hierarchical net name
    pub net: &'a str,
    /// Raw `pintype` tag
    pub typ: &'a str,
}

impl<'a> Pin<'a> {
    /// The net name without its sheet path, `/Sheet/SDC0-D2` -> `SDC0-D2`
    pub fn net_leaf(&self) -> &'a str {
        self.net.rsplit('/').next().unwrap_or(self.net)
    }
}

/// A component in the schematic, with its pins sorted by number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord<'a> {
    pub ref_des: RefDes<'a>,
    pub value: Option<&'a str>,
    pub footprint: Option<&'a str>,
    pub mpn: Option<&'a str>,
    pub pins: Vec<Pin<'a>>,
}

/// A version-checked, parsed netlist
#[derive(Debug, Clone)]
pub struct Netlist<'a> {
    version: &'a str,
    root: Node<'a>,
}

impl<'a> Netlist<'a> {
    /// Check the generator marker, then parse the document.
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let version = version::check(input)?;
        let root = Node::parse(input)?;
        log::debug!(
            "parsed {} bytes, root {:?}",
            input.len(),
            root.label().unwrap_or("<unlabelled>")
        );
        Ok(Netlist { version, root })
    }

    /// Generator version from the `tool` marker, e.g. `9.0.1`
    pub fn version(&self) -> &'a str {
        self.version
    }

    pub fn root(&self) -> &Node<'a> {
        &self.root
    }

    /// Title of the root sheet's title block
    pub fn title(&self) -> Option<&'a str> {
        self.root
            .find_path(&["design", "sheet", "title_block", "title"])?
            .as_list()?
            .get(1)?
            .as_atom()
    }

    pub fn components(&self) -> impl Iterator<Item = RefDes<'a>> + '_ {
        locate::components(&self.root).filter_map(|comp| comp.property_str("ref").map(RefDes))
    }

    pub fn find_component(
        &self,
        ref_des: &str,
        filter: &PinFilter,
    ) -> Result<ComponentRecord<'a>, Error> {
        log::debug!("locating component {ref_des}");
        locate::find_component(&self.root, ref_des, filter)
    }

    /// Sorted, filtered pins of `ref_des`; empty if it has none
    pub fn pins(&self, ref_des: &str, filter: &PinFilter) -> Vec<Pin<'a>> {
        pins::extract(&self.root, RefDes(ref_des), filter)
    }
}

impl<'a> TryFrom<&'a str> for Netlist<'a> {
    type Error = Error;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        Netlist::parse(input)
    }
}
