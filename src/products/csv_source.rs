//! Bundled CSV dataset parsing.
//!
//! The dataset is line-oriented: each non-blank line is one row, the first
//! row is the header row, and every later row is zipped against it into a
//! string-valued `RawRecord` so CSV and API records share one normalization
//! path.

#[cfg(test)]
#[path = "csv_source_test.rs"]
mod csv_source_test;

use serde_json::Value;

use crate::net::types::RawRecord;

/// Split a single CSV line into trimmed fields.
///
/// A `"` anywhere outside quotes opens a quoted run, so `a, "b,c"` keeps the
/// comma inside the second field. Inside quotes `""` is a literal quote and
/// commas do not split. Fields are trimmed after scanning.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (in_quotes, ch) {
            (true, '"') if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            (true, '"') => in_quotes = false,
            (false, '"') => in_quotes = true,
            (false, ',') => fields.push(std::mem::take(&mut current)),
            (_, other) => current.push(other),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_owned()).collect()
}

/// Parse a full CSV document into raw records keyed by header name.
///
/// Lines split on `\n` with an optional trailing `\r`; blank lines are
/// skipped. Cells past the header width are dropped and missing trailing
/// cells leave their keys absent.
pub fn parse_csv(text: &str) -> Vec<RawRecord> {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = parse_csv_line(header_line);

    lines
        .map(|line| {
            headers
                .iter()
                .zip(parse_csv_line(line))
                .map(|(header, cell)| (header.clone(), Value::String(cell)))
                .collect::<RawRecord>()
        })
        .collect()
}
