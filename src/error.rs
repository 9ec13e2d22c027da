use thiserror::Error;

type Span = logos::Span;

/// Structural errors raised while building the tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("corrupted document: unexpected `)` at byte {}", .at.start)]
    UnexpectedClose { at: Span },
    #[error("corrupted document: {depth} list(s) left open, innermost opened at byte {}", .at.start)]
    Unterminated { depth: usize, at: Span },
    #[error("corrupted document: string starting at byte {} is never closed", .at.start)]
    UnterminatedString { at: Span },
}

/// Provenance errors raised by the version gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("document not recognized as a KiCad netlist; supported formats: KiCad {major}")]
    NotRecognized { major: u32 },
    #[error("unsupported version '{found}'; only KiCad {major} netlists are accepted")]
    Unsupported { found: String, major: u32 },
}

/// Netlist errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] ParseError),
    #[error(transparent)]
    Provenance(#[from] VersionError),
    #[error("component '{0}' not found in the netlist")]
    NotFound(String),
    #[error("duplicate refdes '{refdes}' found {count} times; fix the netlist before proceeding")]
    DuplicateRef { refdes: String, count: usize },
    #[error("component '{0}' has no pin data left after filtering")]
    NoPins(String),
    #[error("Unknown pin type {0}")]
    UnknownPinType(String),
}
