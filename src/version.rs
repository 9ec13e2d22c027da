//! Provenance check run on the raw text before it is parsed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::VersionError;

/// Schematic tool whose netlists are understood
pub const GENERATOR: &str = "Eeschema";
/// The only major version of [`GENERATOR`] accepted
pub const SUPPORTED_MAJOR: u32 = 9;

static TOOL_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\(tool\s+"Eeschema\s+([^"]*)"\)"#).expect("valid regex"));

/// Find the `(tool "Eeschema <version>")` marker and return the version
/// string if its major version is supported.
pub fn check(input: &str) -> Result<&str, VersionError> {
    let Some(captures) = TOOL_MARKER.captures(input) else {
        if input.contains(&format!("(tool \"{GENERATOR}")) {
            return Err(VersionError::Unsupported {
                found: String::new(),
                major: SUPPORTED_MAJOR,
            });
        }
        return Err(VersionError::NotRecognized {
            major: SUPPORTED_MAJOR,
        });
    };

    let version = captures.get(1).map_or("", |m| m.as_str());
    match version.split_once('.') {
        Some((major, rest)) if !rest.is_empty() && major.parse::<u32>() == Ok(SUPPORTED_MAJOR) => {
            log::debug!("netlist written by {GENERATOR} {version}");
            Ok(version)
        }
        _ => Err(VersionError::Unsupported {
            found: version.to_owned(),
            major: SUPPORTED_MAJOR,
        }),
    }
}
