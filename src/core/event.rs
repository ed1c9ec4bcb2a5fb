use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One spreadsheet row as delivered by CSV ingestion.
///
/// `submission_date` is carried through opaque and unused by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub submission_date: String,
    pub person_name: String,
    pub events_text: String,
}

impl RawRow {
    #[must_use]
    pub fn new(
        submission_date: impl Into<String>,
        person_name: impl Into<String>,
        events_text: impl Into<String>,
    ) -> Self {
        Self {
            submission_date: submission_date.into(),
            person_name: person_name.into(),
            events_text: events_text.into(),
        }
    }
}

/// A dated, categorized event extracted from one clause of free text.
///
/// Construction goes through the extractor, which guarantees the date is a
/// valid calendar date; events with unparseable dates are never built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub person_name: String,
}

impl TimelineEvent {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        person_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            date,
            person_name: person_name.into(),
        }
    }
}
