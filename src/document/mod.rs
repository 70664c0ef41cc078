// src/document/mod.rs
pub mod sections;

pub use sections::{group_sections, Section, SectionHeading, SectionTracker, SettingKind};

use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::parse::{order_and_filter, parse_table, ColumnLayout, Lifepath};
use crate::render::{render_lifepath, templates};

/// Rough size of one rendered lifepath, used to pre-size the output buffer.
const FRAGMENT_SIZE_HINT: usize = 640;

/// Wrap ordered lifepaths in the preamble, section headings and closing.
pub fn assemble(lifepaths: &[Lifepath]) -> String {
    let mut out = String::with_capacity(
        templates::PREAMBLE.len() + lifepaths.len() * FRAGMENT_SIZE_HINT + templates::CLOSING.len(),
    );
    out.push_str(templates::PREAMBLE);

    let sections = group_sections(lifepaths);
    for section in &sections {
        debug!(heading = %section.heading, lifepaths = section.lifepaths.len(), "section");
        out.push_str(&section.heading.to_string());
        for lifepath in section.lifepaths {
            out.push_str(&render_lifepath(lifepath));
        }
    }

    out.push_str(templates::CLOSING);
    out
}

/// Turn the full text of a lifepath table into a LaTeX document.
///
/// Fails without producing anything when a required column is missing, an id
/// is not an integer, or a kept row is too short.
#[instrument(level = "info", skip(text), fields(bytes = text.len()))]
pub fn build_document(text: &str) -> Result<String> {
    let start = Instant::now();

    let table = parse_table(text)?;
    let layout = ColumnLayout::resolve(&table.header)?;
    let lifepaths = order_and_filter(&table.rows, &layout)?;
    let document = assemble(&lifepaths);

    info!(
        rows = table.rows.len(),
        rendered = lifepaths.len(),
        elapsed = ?start.elapsed(),
        "document built"
    );
    Ok(document)
}
