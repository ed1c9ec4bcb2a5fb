use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::decimal_to_f64;
use crate::error::TimelineResult;
use crate::finance::normalize::PricePoint;

/// Minimum number of samples a trailing window must hold before it is
/// trusted over the full history.
const MIN_WINDOW_SAMPLES: usize = 30;

/// A deterministically projected future price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Estimates the compound annual growth rate over the trailing window.
///
/// Falls back to the full series when the window holds fewer than
/// [`MIN_WINDOW_SAMPLES`] samples; returns `0.0` when no meaningful rate can
/// be computed (empty or single-sample history, non-positive endpoints).
pub fn estimate_cagr(history: &[PricePoint], lookback_years: f64) -> TimelineResult<f64> {
    let Some(last) = history.last() else {
        return Ok(0.0);
    };

    let cutoff_days = (lookback_years * 365.25).round() as i64;
    let cutoff = last.date - chrono::Duration::days(cutoff_days.max(0));
    let window: Vec<&PricePoint> = history.iter().filter(|p| p.date >= cutoff).collect();

    let (first, last, years) = if window.len() < MIN_WINDOW_SAMPLES {
        let first = history[0];
        let span_years = ((last.date - first.date).num_days() as f64 / 365.25).max(0.25);
        (first, *last, span_years)
    } else {
        (*window[0], *last, lookback_years)
    };

    if years <= 0.0 || history.len() < 2 {
        return Ok(0.0);
    }

    let first_price = decimal_to_f64(first.price, "price")?;
    let last_price = decimal_to_f64(last.price, "price")?;
    if first_price <= 0.0 || last_price <= 0.0 {
        debug!("non-positive prices in history, growth rate defaults to 0");
        return Ok(0.0);
    }

    Ok((last_price / first_price).powf(1.0 / years) - 1.0)
}

/// Projects future prices at constant growth equal to the trailing CAGR.
///
/// No randomness: each future date gets
/// `last_price * (1 + daily)^days_since_last` with the CAGR converted to a
/// daily compounded rate. Empty history or an empty future grid yield an
/// empty projection.
pub fn forecast_from_history(
    history: &[PricePoint],
    future_dates: &[NaiveDate],
    lookback_years: f64,
) -> TimelineResult<Vec<ForecastPoint>> {
    let Some(last) = history.last() else {
        return Ok(Vec::new());
    };
    if future_dates.is_empty() {
        return Ok(Vec::new());
    }

    let growth = estimate_cagr(history, lookback_years)?;
    let daily = (1.0 + growth).powf(1.0 / 365.25) - 1.0;
    let last_price = decimal_to_f64(last.price, "price")?;

    Ok(future_dates
        .iter()
        .map(|&date| {
            let days = (date - last.date).num_days().max(0);
            ForecastPoint {
                date,
                price: last_price * (1.0 + daily).powi(days as i32),
            }
        })
        .collect())
}
