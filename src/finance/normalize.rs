use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{TimelineError, TimelineResult};

/// One raw `(date, adjusted close)` sample from the finance provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

impl PricePoint {
    #[must_use]
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// A price sample rebased to percentage change from the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeriesPoint {
    pub date: NaiveDate,
    pub percent_change: f64,
    pub is_projected: bool,
}

/// Rebases a price series to percentage change from the reference date.
///
/// The baseline is the price at the reference date or, failing that, the
/// nearest preceding sample; with no sample on or before the reference the
/// call fails with [`TimelineError::NoBaseline`] and the caller renders an
/// empty state. Points dated after `today` are flagged as projected. The
/// output keeps the input order untouched.
pub fn normalize_series(
    raw_series: &[PricePoint],
    reference_date: NaiveDate,
    today: NaiveDate,
) -> TimelineResult<Vec<NormalizedSeriesPoint>> {
    let baseline = raw_series
        .iter()
        .filter(|point| point.date <= reference_date)
        .max_by_key(|point| point.date)
        .ok_or(TimelineError::NoBaseline {
            reference: reference_date,
        })?;

    if baseline.price.is_zero() {
        return Err(TimelineError::InvalidData(
            "baseline price must be non-zero".to_owned(),
        ));
    }

    let hundred = Decimal::from(100);
    raw_series
        .iter()
        .map(|point| {
            let change = (point.price / baseline.price - Decimal::ONE) * hundred;
            Ok(NormalizedSeriesPoint {
                date: point.date,
                percent_change: decimal_to_f64(change, "percent_change")?,
                is_projected: point.date > today,
            })
        })
        .collect()
}
