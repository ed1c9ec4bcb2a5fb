use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{TimelineError, TimelineResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> TimelineResult<f64> {
    value.to_f64().ok_or_else(|| {
        TimelineError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Days since the Common Era epoch, as the f64 domain of the time axis.
#[must_use]
pub fn date_to_day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
