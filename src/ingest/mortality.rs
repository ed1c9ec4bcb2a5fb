use std::collections::BTreeMap;
use std::io::Read;

use tracing::debug;

use crate::error::{TimelineError, TimelineResult};

/// Reads a `;`-separated mortality table into an age → remaining-years map.
///
/// The format is `age;years_remaining` per line after an optional header.
/// Parsing is deliberately tolerant: blank lines, header rows, non-numeric
/// first columns and comma decimals are all accepted or skipped; only rows
/// with a negative value are rejected outright by omission.
pub fn read_mortality_table<R: Read>(reader: R, separator: char) -> TimelineResult<BTreeMap<u32, u32>> {
    let mut text = String::new();
    let mut reader = reader;
    reader
        .read_to_string(&mut text)
        .map_err(|e| TimelineError::InvalidData(format!("mortality table is not UTF-8: {e}")))?;

    let mut table = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim_start_matches('\u{feff}').trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split(separator).map(str::trim);
        let (Some(age_part), Some(years_part)) = (parts.next(), parts.next()) else {
            continue;
        };

        // "Età 30" style first columns reduce to their leading number.
        let Some(age_token) = age_part.split_whitespace().next_back() else {
            continue;
        };
        let Ok(age) = age_token.parse::<u32>() else {
            debug!(line, "non-numeric mortality row skipped");
            continue;
        };
        let Ok(years_left) = years_part.replace(',', ".").parse::<f64>() else {
            continue;
        };
        if years_left < 0.0 {
            continue;
        }

        table.insert(age, years_left as u32);
    }
    Ok(table)
}
