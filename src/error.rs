use chrono::NaiveDate;
use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("unrecognized or invalid date token: `{token}`")]
    DateParse { token: String },

    #[error("csv is missing required columns: {expected}")]
    MissingColumns { expected: String },

    #[error("no price on or before reference date {reference}")]
    NoBaseline { reference: NaiveDate },

    #[error("finance data unavailable: {0}")]
    DataUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
