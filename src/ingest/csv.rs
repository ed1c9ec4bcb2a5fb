use std::io::Read;

use tracing::debug;

use crate::core::event::{RawRow, TimelineEvent};
use crate::core::extract::EventExtractor;
use crate::error::{TimelineError, TimelineResult};

const COLUMN_SUBMISSION: &str = "submission date";
const COLUMN_NAME: &str = "nome";
const COLUMN_EVENTS: &str = "eventi";
// Legacy exports carried a stray colon in the events header.
const COLUMN_EVENTS_LEGACY: &str = "eventi:";

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    submission: usize,
    name: usize,
    events: usize,
}

fn map_columns(headers: &csv::StringRecord) -> TimelineResult<ColumnMap> {
    let mut submission = None;
    let mut name = None;
    let mut events = None;

    for (index, header) in headers.iter().enumerate() {
        match header.trim().to_lowercase().as_str() {
            COLUMN_SUBMISSION => submission = submission.or(Some(index)),
            COLUMN_NAME => name = name.or(Some(index)),
            COLUMN_EVENTS | COLUMN_EVENTS_LEGACY => events = events.or(Some(index)),
            _ => {}
        }
    }

    match (submission, name, events) {
        (Some(submission), Some(name), Some(events)) => Ok(ColumnMap {
            submission,
            name,
            events,
        }),
        _ => Err(TimelineError::MissingColumns {
            expected: "'Submission Date', 'Nome', 'Eventi'".to_owned(),
        }),
    }
}

/// Reads the raw rows of a UTF-8 events CSV.
///
/// Header matching is case-insensitive; rows with an empty name are skipped.
pub fn read_raw_rows<R: Read>(reader: R) -> TimelineResult<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = map_columns(csv_reader.headers()?)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("").trim().to_owned();

        let person_name = field(columns.name);
        if person_name.is_empty() {
            debug!("row without a person name skipped");
            continue;
        }

        rows.push(RawRow {
            submission_date: field(columns.submission),
            person_name,
            events_text: field(columns.events),
        });
    }
    Ok(rows)
}

/// Reads a CSV and runs extraction over every row with one shared extractor,
/// so the day/month ordering hint learned early in the file applies to the
/// rest of it.
pub fn load_events<R: Read>(
    reader: R,
    extractor: &mut EventExtractor,
) -> TimelineResult<Vec<TimelineEvent>> {
    let rows = read_raw_rows(reader)?;

    let mut events = Vec::new();
    for row in &rows {
        events.extend(extractor.extract(&row.events_text, &row.person_name));
    }
    debug!(rows = rows.len(), events = events.len(), "csv ingestion finished");
    Ok(events)
}
