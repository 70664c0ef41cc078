// src/parse/mod.rs
pub mod header;
pub mod order;
pub mod record;
pub mod split;

pub use header::{ColumnLayout, HeaderIndex};
pub use order::order_and_filter;
pub use record::{Lifepath, RawRow};
pub use split::split_fields;

use tracing::{debug, instrument};

use crate::error::{LifepathError, Result};

/// The header index plus every data row, in file order.
#[derive(Debug)]
pub struct Table {
    pub header: HeaderIndex,
    pub rows: Vec<RawRow>,
}

/// Split `text` into rows.
///
/// Lines end at `\n`; a trailing `\r` is dropped. Empty lines (including the
/// one after a final newline) produce no row.
pub fn parse_lines(text: &str) -> Vec<RawRow> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                return None;
            }
            Some(RawRow::new(idx + 1, split_fields(line)))
        })
        .collect()
}

/// Parse the whole input: first row is the header, the rest are data.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_table(text: &str) -> Result<Table> {
    let mut rows = parse_lines(text).into_iter();
    let header_row = rows.next().ok_or(LifepathError::EmptyInput)?;
    let header = HeaderIndex::from_row(&header_row.fields);
    let rows: Vec<RawRow> = rows.collect();
    debug!(columns = header.len(), rows = rows.len(), "parsed table");
    Ok(Table { header, rows })
}
