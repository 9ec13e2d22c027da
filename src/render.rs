//! Pinout CSV output.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::ComponentRecord;

const MISSING: &str = "N/A";

/// `pinout-<title>-<refdes>.csv`, with the title reduced to characters that
/// are safe in a file name.
pub fn pinout_file_name(title: Option<&str>, ref_des: &str) -> String {
    let title = match title {
        Some(title) => title
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .trim()
            .replace(' ', "_"),
        None => "Unknown".to_owned(),
    };
    format!("pinout-{title}-{ref_des}.csv")
}

fn symbol_value<'a>(comp: &ComponentRecord<'a>) -> &'a str {
    match comp.value.filter(|value| !value.trim().is_empty()) {
        Some(value) => value,
        None => {
            log::warn!(
                "component '{}' has an empty symbol value, defaulted to '{MISSING}'",
                comp.ref_des
            );
            MISSING
        }
    }
}

fn part_number<'a>(comp: &ComponentRecord<'a>) -> &'a str {
    match comp.mpn.filter(|mpn| !mpn.is_empty()) {
        Some(mpn) => {
            let trimmed = mpn.trim();
            if trimmed != mpn {
                log::warn!(
                    "part number for '{}' has leading/trailing spaces, trimmed to '{trimmed}'",
                    comp.ref_des
                );
            }
            trimmed
        }
        None => {
            log::warn!(
                "component '{}' has no manufacturer part number, defaulted to '{MISSING}'",
                comp.ref_des
            );
            MISSING
        }
    }
}

/// Write the pinout of `comp` as CSV, every field quoted: a metadata block,
/// a blank row, then one row per pin with the net's leaf name.
pub fn write_pinout<W: Write>(
    writer: W,
    comp: &ComponentRecord<'_>,
    title: Option<&str>,
    generated_on: &str,
) -> Result<(), csv::Error> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .flexible(true)
        .from_writer(writer);

    csv.write_record(["Project:", title.unwrap_or("Unknown")])?;
    csv.write_record(["Component Refdes:", comp.ref_des.0])?;
    csv.write_record(["Symbol Value:", symbol_value(comp)])?;
    csv.write_record(["Manufacturer Part Number:", part_number(comp)])?;
    csv.write_record(["Generated on:", generated_on])?;
    csv.write_record(None::<&[u8]>)?;
    csv.write_record(["Pin Number", "Pin Name", "Net Name"])?;
    for pin in &comp.pins {
        csv.write_record([pin.num.0, pin.name, pin.net_leaf()])?;
    }
    csv.flush()?;
    Ok(())
}
