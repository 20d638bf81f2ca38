//! Producer extraction and per-producer win grouping.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::movie::MovieRecord;

/// Separators inside a producers field: a comma, a semicolon, or the word
/// `and` with ASCII whitespace on both sides. Non-breaking and other Unicode
/// spaces do not separate.
static PRODUCER_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;]|(?-u:\s)and(?-u:\s)").expect("valid regex"));

/// Split a raw producers field into trimmed, non-empty names.
///
/// `"Yoram Globus and Menahem Golan"` yields two names; `"Alexandra"` stays
/// intact because `and` only separates when surrounded by whitespace.
pub fn split_producers(raw: &str) -> Vec<String> {
    PRODUCER_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map each producer of a winning movie to the years of their wins.
///
/// Non-winning records and records without producers are ignored. Years are
/// kept in record order and may repeat; interval computation normalizes them.
pub fn group_wins_by_producer(records: &[MovieRecord]) -> BTreeMap<String, Vec<i32>> {
    let mut wins: BTreeMap<String, Vec<i32>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.winner) {
        let Some(raw) = record.producers.as_deref() else {
            continue;
        };
        for producer in split_producers(raw) {
            wins.entry(producer).or_default().push(record.year);
        }
    }

    wins
}
