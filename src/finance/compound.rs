use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Inputs for the compound-interest projection.
///
/// Rates are annual decimals (`0.05` = 5%). Contributions land on the first
/// day of each month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundParams {
    pub initial: f64,
    pub monthly: f64,
    pub annual_rate: f64,
    pub mgmt_fee_annual: f64,
    pub inflation_rate: f64,
    pub years: u32,
}

impl Default for CompoundParams {
    fn default() -> Self {
        Self {
            initial: 10_000.0,
            monthly: 300.0,
            annual_rate: 0.05,
            mgmt_fee_annual: 0.005,
            inflation_rate: 0.02,
            years: 20,
        }
    }
}

impl CompoundParams {
    fn validate(self) -> TimelineResult<Self> {
        if self.years == 0 {
            return Err(TimelineError::InvalidData(
                "projection horizon must be at least one year".to_owned(),
            ));
        }
        for (value, name) in [
            (self.initial, "initial"),
            (self.monthly, "monthly"),
            (self.annual_rate, "annual_rate"),
            (self.mgmt_fee_annual, "mgmt_fee_annual"),
            (self.inflation_rate, "inflation_rate"),
        ] {
            if !value.is_finite() {
                return Err(TimelineError::InvalidData(format!(
                    "compound param `{name}` must be finite"
                )));
            }
        }
        if self.annual_rate <= -1.0 || self.inflation_rate <= -1.0 {
            return Err(TimelineError::InvalidData(
                "annual rates must be greater than -100%".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One day of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundPoint {
    pub date: NaiveDate,
    /// Nominal portfolio value.
    pub value: f64,
    /// Cumulative contributions, initial capital included.
    pub contributions: f64,
    /// What the same cash flows would be worth growing only at inflation.
    pub inflation_value: f64,
    /// Nominal value deflated to start-date purchasing power.
    pub real_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundProjection {
    pub net_daily_rate: f64,
    pub points: Vec<CompoundPoint>,
}

/// Simulates daily compounding with monthly day-1 contributions.
///
/// Model:
/// `v[t+1] = v[t] * (1 + r_net) + contribution_if_first_of_month`
/// with `r_net = (1 + annual_rate)^(1/365) - 1 - mgmt_fee_annual / 365`.
/// The horizon endpoint clamps the day of month to 28 so month-end starts
/// stay representable.
pub fn simulate_compound(
    start: NaiveDate,
    params: CompoundParams,
) -> TimelineResult<CompoundProjection> {
    let params = params.validate()?;

    let end = NaiveDate::from_ymd_opt(
        start.year() + params.years as i32,
        start.month(),
        start.day().min(28),
    )
    .ok_or_else(|| TimelineError::InvalidData("projection horizon overflows calendar".to_owned()))?;

    let daily_gross = (1.0 + params.annual_rate).powf(1.0 / 365.0) - 1.0;
    let daily_net = daily_gross - params.mgmt_fee_annual / 365.0;
    let daily_inflation = (1.0 + params.inflation_rate).powf(1.0 / 365.0) - 1.0;

    let n_days = (end - start).num_days().max(0) as u64;
    let mut points = Vec::with_capacity(n_days as usize + 1);

    let first_contribution = if start.day() == 1 { params.monthly.max(0.0) } else { 0.0 };
    let opening = params.initial + first_contribution;
    let mut value = opening;
    let mut contributions = opening;
    let mut inflation_value = opening;

    points.push(point(start, value, contributions, inflation_value, opening));

    for offset in 1..=n_days {
        let date = start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| TimelineError::InvalidData("date overflow in projection".to_owned()))?;
        let contribution = if date.day() == 1 { params.monthly.max(0.0) } else { 0.0 };

        value = value * (1.0 + daily_net) + contribution;
        contributions += contribution;
        inflation_value = inflation_value * (1.0 + daily_inflation) + contribution;

        points.push(point(date, value, contributions, inflation_value, opening));
    }

    Ok(CompoundProjection {
        net_daily_rate: daily_net,
        points,
    })
}

fn point(
    date: NaiveDate,
    value: f64,
    contributions: f64,
    inflation_value: f64,
    opening: f64,
) -> CompoundPoint {
    // Deflation factor relative to the opening balance; degenerate factors
    // (zero opening, collapsed inflation path) leave the value nominal.
    let factor = if opening > 0.0 { inflation_value / opening } else { 1.0 };
    let factor = if factor > 0.0 { factor } else { 1.0 };
    CompoundPoint {
        date,
        value,
        contributions,
        inflation_value,
        real_value: value / factor,
    }
}
