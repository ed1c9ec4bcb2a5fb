use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use lifeline_rs::TimelineError;
use lifeline_rs::finance::{
    CompoundParams, PricePoint, estimate_cagr, forecast_from_history, simulate_compound,
};
use rust_decimal::Decimal;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid ymd")
}

#[test]
fn projection_opens_with_initial_capital_plus_day_one_contribution() {
    let params = CompoundParams::default();

    let mid_month = simulate_compound(ymd(2024, 3, 15), params).expect("projection");
    assert_relative_eq!(mid_month.points[0].value, params.initial);

    let first_of_month = simulate_compound(ymd(2024, 3, 1), params).expect("projection");
    assert_relative_eq!(first_of_month.points[0].value, params.initial + params.monthly);
}

#[test]
fn contributions_accumulate_monthly_and_never_decrease() {
    let projection = simulate_compound(ymd(2024, 1, 15), CompoundParams::default())
        .expect("projection");

    for pair in projection.points.windows(2) {
        assert!(pair[1].contributions >= pair[0].contributions);
    }

    let last = projection.points.last().expect("non-empty projection");
    assert!(last.contributions > projection.points[0].contributions);
    assert!(last.value > last.contributions * 0.9);
}

#[test]
fn positive_net_rate_beats_pure_contributions() {
    let params = CompoundParams {
        monthly: 0.0,
        ..CompoundParams::default()
    };
    let projection = simulate_compound(ymd(2024, 1, 15), params).expect("projection");
    let last = projection.points.last().expect("non-empty projection");

    assert!(projection.net_daily_rate > 0.0);
    assert!(last.value > params.initial);
    assert_relative_eq!(last.contributions, params.initial);
}

#[test]
fn inflation_erodes_real_value() {
    let projection = simulate_compound(ymd(2024, 1, 15), CompoundParams::default())
        .expect("projection");
    let last = projection.points.last().expect("non-empty projection");
    assert!(last.real_value < last.value);
}

#[test]
fn horizon_is_month_end_safe() {
    let projection = simulate_compound(ymd(2024, 1, 31), CompoundParams::default())
        .expect("projection");
    let last = projection.points.last().expect("non-empty projection");
    assert_eq!(last.date, ymd(2044, 1, 28));
}

#[test]
fn zero_year_horizon_is_rejected() {
    let params = CompoundParams {
        years: 0,
        ..CompoundParams::default()
    };
    assert!(matches!(
        simulate_compound(ymd(2024, 1, 1), params),
        Err(TimelineError::InvalidData(_))
    ));
}

fn history(prices: &[(NaiveDate, i64)]) -> Vec<PricePoint> {
    prices
        .iter()
        .map(|&(date, price)| PricePoint::new(date, Decimal::from(price)))
        .collect()
}

fn daily_history(start: NaiveDate, days: usize, price_at: impl Fn(usize) -> f64) -> Vec<PricePoint> {
    (0..days)
        .map(|i| {
            let date = start + chrono::Duration::days(i as i64);
            let cents = (price_at(i) * 100.0).round() as i64;
            PricePoint::new(date, Decimal::new(cents, 2))
        })
        .collect()
}

#[test]
fn flat_history_has_zero_growth_and_flat_forecast() {
    let hist = daily_history(ymd(2020, 1, 1), 400, |_| 100.0);
    let growth = estimate_cagr(&hist, 10.0).expect("cagr");
    assert_relative_eq!(growth, 0.0, epsilon = 1e-9);

    let future = vec![ymd(2022, 1, 1), ymd(2023, 1, 1)];
    let forecast = forecast_from_history(&hist, &future, 10.0).expect("forecast");
    assert_eq!(forecast.len(), 2);
    for point in &forecast {
        assert_relative_eq!(point.price, 100.0, epsilon = 1e-6);
    }
}

#[test]
fn doubling_over_a_year_estimates_roughly_hundred_percent() {
    // 366 daily samples moving linearly from 100 to 200.
    let hist = daily_history(ymd(2020, 1, 1), 366, |i| 100.0 + i as f64 * (100.0 / 365.0));
    let growth = estimate_cagr(&hist, 1.0).expect("cagr");
    assert!(growth > 0.9 && growth < 1.1, "growth = {growth}");
}

#[test]
fn short_histories_fall_back_to_the_full_series() {
    let hist = history(&[(ymd(2020, 1, 1), 100), (ymd(2021, 1, 1), 110)]);
    let growth = estimate_cagr(&hist, 10.0).expect("cagr");
    assert!(growth > 0.05 && growth < 0.15, "growth = {growth}");
}

#[test]
fn empty_history_or_future_yields_empty_forecast() {
    assert!(forecast_from_history(&[], &[ymd(2025, 1, 1)], 10.0)
        .expect("forecast")
        .is_empty());

    let hist = history(&[(ymd(2020, 1, 1), 100)]);
    assert!(forecast_from_history(&hist, &[], 10.0).expect("forecast").is_empty());
}

#[test]
fn forecast_grows_with_positive_trailing_growth() {
    let hist = daily_history(ymd(2018, 1, 1), 1100, |i| 100.0 * (1.0 + i as f64 * 0.0005));
    let last_date = hist.last().expect("history").date;
    let future: Vec<NaiveDate> = (1..=3)
        .map(|years| ymd(last_date.year() + years, 1, 1))
        .collect();

    let forecast = forecast_from_history(&hist, &future, 3.0).expect("forecast");
    assert_eq!(forecast.len(), 3);
    for pair in forecast.windows(2) {
        assert!(pair[1].price > pair[0].price);
    }
}
