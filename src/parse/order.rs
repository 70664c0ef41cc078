// src/parse/order.rs
use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::parse::header::ColumnLayout;
use crate::parse::record::{Lifepath, RawRow};

/// Sort data rows by integer `id` (stable), then keep the ones marked `use = TRUE`.
///
/// Every row must carry a valid id, even rows that end up excluded. Only kept
/// rows are converted to [`Lifepath`]s, so an excluded row only needs its `id`
/// and `use` cells.
#[instrument(level = "debug", skip_all, fields(rows = rows.len()))]
pub fn order_and_filter(rows: &[RawRow], layout: &ColumnLayout) -> Result<Vec<Lifepath>> {
    let mut keyed = rows
        .iter()
        .map(|row| row.id(layout).map(|id| (id, row)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|(id, _)| *id);

    let mut kept = Vec::with_capacity(keyed.len());
    for (id, row) in keyed {
        if !row.is_used(layout)? {
            trace!(id, line = row.line, "skipping unused lifepath");
            continue;
        }
        kept.push(Lifepath::from_row(row, layout)?);
    }

    debug!(kept = kept.len(), dropped = rows.len() - kept.len(), "ordered lifepaths");
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifepathError;
    use crate::parse::header::HeaderIndex;
    use crate::parse::split::split_fields;

    const HEADER: &str = "id,use,setting,born,name,years,res,stats,leads,skill_points,skills,general_skill_points,trait_points,traits";

    fn layout() -> ColumnLayout {
        ColumnLayout::resolve(&HeaderIndex::from_row(&split_fields(HEADER))).unwrap()
    }

    fn row(line: usize, id: &str, used: &str, name: &str) -> RawRow {
        RawRow::new(
            line,
            split_fields(&format!("{id},{used},Town,TRUE,{name},1,1,,x,1,s,0,0,t")),
        )
    }

    fn names(lps: &[Lifepath]) -> Vec<&str> {
        lps.iter().map(|lp| lp.name.as_str()).collect()
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let rows = vec![row(2, "10", "TRUE", "ten"), row(3, "9", "TRUE", "nine"), row(4, "-1", "TRUE", "neg")];
        let out = order_and_filter(&rows, &layout()).unwrap();
        assert_eq!(names(&out), vec!["neg", "nine", "ten"]);
    }

    #[test]
    fn equal_ids_keep_input_order() {
        let rows = vec![
            row(2, "5", "TRUE", "first"),
            row(3, "1", "TRUE", "low"),
            row(4, "5", "TRUE", "second"),
            row(5, "5", "TRUE", "third"),
        ];
        let out = order_and_filter(&rows, &layout()).unwrap();
        assert_eq!(names(&out), vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn keeps_only_exact_true() {
        let rows = vec![
            row(2, "1", "TRUE", "kept"),
            row(3, "2", "true", "lower"),
            row(4, "3", "FALSE", "false"),
            row(5, "4", "", "empty"),
            row(6, "5", " TRUE", "padded"),
        ];
        let out = order_and_filter(&rows, &layout()).unwrap();
        // fields are space-trimmed at split time, so " TRUE" is kept
        assert_eq!(names(&out), vec!["kept", "padded"]);
    }

    #[test]
    fn bad_id_in_excluded_row_is_still_fatal() {
        let rows = vec![row(2, "1", "TRUE", "ok"), row(3, "two", "FALSE", "bad")];
        assert_eq!(
            order_and_filter(&rows, &layout()),
            Err(LifepathError::InvalidId {
                line: 3,
                value: "two".into()
            })
        );
    }

    #[test]
    fn excluded_rows_may_be_short() {
        let rows = vec![
            row(2, "1", "TRUE", "ok"),
            RawRow::new(3, split_fields("2,FALSE")),
        ];
        let out = order_and_filter(&rows, &layout()).unwrap();
        assert_eq!(names(&out), vec!["ok"]);
    }

    #[test]
    fn short_included_row_is_fatal() {
        let rows = vec![RawRow::new(7, split_fields("2,TRUE,Town"))];
        assert!(matches!(
            order_and_filter(&rows, &layout()),
            Err(LifepathError::MissingField { line: 7, .. })
        ));
    }
}
