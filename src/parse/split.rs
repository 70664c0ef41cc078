// src/parse/split.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a line tail made only of whole quoted spans and unquoted characters.
/// A comma is a field delimiter only when the text after it matches this.
static BALANCED_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:[^"]|'[^']*'|"[^"]*")*$"#).unwrap());

/// Trim surrounding spaces and double quotes (in any mix) from one field.
/// Single quotes and other whitespace are left alone.
pub fn clean_field(raw: &str) -> String {
    raw.trim_matches([' ', '"']).to_string()
}

/// Split one line into cleaned fields.
///
/// Commas inside `"..."` or `'...'` spans do not split. Quoting is never
/// validated: unbalanced quotes still give a deterministic split, it just may
/// not be the one the author intended.
pub fn split_fields(line: &str) -> Vec<String> {
    // without a double quote every tail matches, so every comma splits
    if !line.contains('"') {
        return line.split(',').map(clean_field).collect();
    }

    let mut fields = Vec::new();
    let mut start = 0;
    for (pos, _) in line.match_indices(',') {
        if BALANCED_TAIL.is_match(&line[pos + 1..]) {
            fields.push(clean_field(&line[start..pos]));
            start = pos + 1;
        }
    }
    fields.push(clean_field(&line[start..]));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rows_match_comma_split() {
        for line in [
            "1,TRUE,Town,TRUE,Farmer",
            "a,,b",
            ",leading,and,trailing,",
            "single",
            "it's,fine",
        ] {
            let expected: Vec<String> = line.split(',').map(str::to_string).collect();
            assert_eq!(split_fields(line), expected, "line: {line}");
        }
    }

    #[test]
    fn double_quoted_comma_is_kept() {
        assert_eq!(split_fields(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
    }

    #[test]
    fn single_quoted_span_hides_double_quote() {
        // the apostrophe pair shields the lone `"`, so both commas split
        let fields = split_fields(r#"x,'a"b',y"#);
        assert_eq!(fields, vec!["x", "'a\"b'", "y"]);
    }

    #[test]
    fn fields_are_trimmed_of_spaces_and_double_quotes_only() {
        assert_eq!(
            split_fields("  a  , \" b \" ,'c',\td"),
            vec!["a", "b", "'c'", "\td"]
        );
    }

    #[test]
    fn quoted_lists_keep_their_commas() {
        let line = r#"7,TRUE,Village,FALSE,Cook,4,6,,"Soldier, Baker",3,"Cooking, Sewing",0,1,"""#;
        let fields = split_fields(line);
        assert_eq!(fields.len(), 14);
        assert_eq!(fields[8], "Soldier, Baker");
        assert_eq!(fields[10], "Cooking, Sewing");
        assert_eq!(fields[13], "");
    }

    #[test]
    fn unbalanced_quote_does_not_panic() {
        let fields = split_fields(r#"a,"b,c"#);
        // only the last comma has a balanced tail
        assert_eq!(fields, vec!["a,\"b", "c"]);
        assert_eq!(split_fields(r#"a","b"#).len(), 1);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
    }
}
