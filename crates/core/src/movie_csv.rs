//! Record parser for `;`-delimited movie lists.
//!
//! Expected layout, one movie per line, with an optional header row:
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! ```
//!
//! Parsing is pure: no I/O beyond reading the supplied bytes, and the first
//! bad row aborts the whole input.

use csv::{ReaderBuilder, StringRecord};

use crate::error::ParseError;
use crate::movie::NewMovie;

// ── Constants ────────────────────────────────────────────────────────

/// Field separator.
pub const DELIMITER: u8 = b';';

/// Minimum number of fields a data row must carry.
pub const MIN_COLUMNS: usize = 5;

/// First field of the optional header row (compared case-insensitively).
pub const HEADER_FIRST_FIELD: &str = "year";

/// Winner column value marking an award win (compared case-insensitively).
pub const WINNER_MARKER: &str = "yes";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ── Parsing ──────────────────────────────────────────────────────────

/// Parse an entire upload into movies tagged with `import_id`.
///
/// Blank lines are skipped. A header row is dropped only when it is the
/// first row. Any malformed row fails the whole input.
pub fn parse_movies(input: &[u8], import_id: &str) -> Result<Vec<NewMovie>, ParseError> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut movies = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if index == 0 && is_header_row(&record) {
            continue;
        }
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);
        movies.push(parse_record(&record, line, import_id)?);
    }

    Ok(movies)
}

/// Whether `record` is the `year;title;...` header.
pub fn is_header_row(record: &StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|first| first.trim().eq_ignore_ascii_case(HEADER_FIRST_FIELD))
}

/// Convert one delimited row into a [`NewMovie`].
///
/// `title` is only trimmed here; rejecting a blank title is left to
/// persisted-field validation.
pub fn parse_record(
    record: &StringRecord,
    line: u64,
    import_id: &str,
) -> Result<NewMovie, ParseError> {
    if record.len() < MIN_COLUMNS {
        return Err(ParseError::MalformedRecord { line });
    }

    let raw_year = &record[0];
    let year = raw_year
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidYear {
            line,
            value: raw_year.to_string(),
        })?;

    Ok(NewMovie {
        year,
        title: record[1].trim().to_string(),
        studios: non_blank(&record[2]),
        producers: non_blank(&record[3]),
        winner: record[4].trim().eq_ignore_ascii_case(WINNER_MARKER),
        import_id: import_id.to_string(),
    })
}

fn non_blank(field: &str) -> Option<String> {
    let trimmed = field.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
