use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use crate::{error::Error, order, raw, sexpr::Node, Pin, PinNum, RefDes};

/// Electrical type of a pin, as written in a net node's `pintype`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PinType {
    Input,
    Output,
    Bidirectional,
    TriState,
    Passive,
    Free,
    Unspecified,
    PowerInput,
    PowerOutput,
    OpenCollector,
    OpenEmitter,
    Unconnected,
}

impl PinType {
    pub const ALL: [PinType; 12] = [
        Self::Input,
        Self::Output,
        Self::Bidirectional,
        Self::TriState,
        Self::Passive,
        Self::Free,
        Self::Unspecified,
        Self::PowerInput,
        Self::PowerOutput,
        Self::OpenCollector,
        Self::OpenEmitter,
        Self::Unconnected,
    ];

    /// The tag KiCad writes for this type
    pub fn tag(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Bidirectional => "bidirectional",
            Self::TriState => "tri_state",
            Self::Passive => "passive",
            Self::Free => "free",
            Self::Unspecified => "unspecified",
            Self::PowerInput => "power_in",
            Self::PowerOutput => "power_out",
            Self::OpenCollector => "open_collector",
            Self::OpenEmitter => "open_emitter",
            Self::Unconnected => "no_connect",
        }
    }
}

impl Display for PinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PinType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Stacked pins are written as e.g. "passive+no_connect"
        if value.ends_with("no_connect") {
            return Ok(Self::Unconnected);
        }
        Self::ALL
            .into_iter()
            .find(|typ| typ.tag() == value)
            .ok_or_else(|| Error::UnknownPinType(value.to_owned()))
    }
}

/// The pin types left out of a pinout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinFilter {
    excluded: BTreeSet<PinType>,
}

impl Default for PinFilter {
    /// Power pins and unconnected pins
    fn default() -> Self {
        Self::new([
            PinType::PowerInput,
            PinType::PowerOutput,
            PinType::Unconnected,
        ])
    }
}

impl PinFilter {
    pub fn new(excluded: impl IntoIterator<Item = PinType>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Keep every pin
    pub fn none() -> Self {
        Self {
            excluded: BTreeSet::new(),
        }
    }

    pub fn excludes(&self, typ: PinType) -> bool {
        self.excluded.contains(&typ)
    }

    /// Whether a raw `pintype` tag is excluded. Tags that are missing or not
    /// understood are always kept.
    pub fn excludes_tag(&self, tag: Option<&str>) -> bool {
        tag.and_then(|tag| tag.parse::<PinType>().ok())
            .is_some_and(|typ| self.excludes(typ))
    }

    pub fn excluded(&self) -> impl Iterator<Item = PinType> + '_ {
        self.excluded.iter().copied()
    }
}

/// Collect the pins of `ref_des` from every net, drop the excluded pin types
/// and sort what is left by pin number.
pub fn extract<'a>(root: &Node<'a>, ref_des: RefDes<'_>, filter: &PinFilter) -> Vec<Pin<'a>> {
    let mut pins = vec![];
    let mut dropped = 0;

    for net in raw::nets(root) {
        for node in net.nodes.iter().filter(|node| node.ref_des == Some(ref_des.0)) {
            let Some(num) = node.num else {
                log::warn!(
                    "{ref_des}: node without a pin number on net {}",
                    net.name.unwrap_or("<unnamed>")
                );
                continue;
            };
            if filter.excludes_tag(node.typ) {
                dropped += 1;
                continue;
            }
            if net.name.is_none() {
                log::warn!("{ref_des}.{num}: net {} has no name", net.code.unwrap_or("?"));
            }
            pins.push(Pin {
                num: PinNum(num),
                name: node.function.unwrap_or(""),
                net: net.name.unwrap_or(""),
                typ: node.typ.unwrap_or(""),
            });
        }
    }

    log::debug!(
        "{ref_des}: {} pin(s) kept, {dropped} excluded by type",
        pins.len()
    );
    order::sort_pins(&mut pins);
    pins
}
