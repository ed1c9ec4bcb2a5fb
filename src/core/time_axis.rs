use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::date_to_day_number;
use crate::error::{TimelineError, TimelineResult};

/// Tuning controls for fitting the visible date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisTuning {
    pub left_padding_ratio: f64,
    pub right_padding_ratio: f64,
    pub min_padding_days: f64,
    pub min_span_days: f64,
}

impl Default for TimeAxisTuning {
    fn default() -> Self {
        Self {
            left_padding_ratio: 0.10,
            right_padding_ratio: 0.10,
            min_padding_days: 15.0,
            min_span_days: 1.0,
        }
    }
}

impl TimeAxisTuning {
    fn validate(self) -> TimelineResult<Self> {
        if !self.left_padding_ratio.is_finite()
            || !self.right_padding_ratio.is_finite()
            || self.left_padding_ratio < 0.0
            || self.right_padding_ratio < 0.0
        {
            return Err(TimelineError::InvalidData(
                "time axis padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_padding_days.is_finite() || self.min_padding_days < 0.0 {
            return Err(TimelineError::InvalidData(
                "time axis min padding must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_days.is_finite() || self.min_span_days <= 0.0 {
            return Err(TimelineError::InvalidData(
                "time axis min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Monotonic date → horizontal-unit transform over a padded visible range.
///
/// The domain is calendar days; equal or increasing dates never produce
/// decreasing anchors. The output unit is whatever the caller's viewport
/// width is expressed in; no pixel semantics are assumed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    visible_start: f64,
    visible_end: f64,
}

impl TimeAxis {
    /// Fits an axis to the given dates with symmetric padding.
    pub fn from_dates(dates: &[NaiveDate], tuning: TimeAxisTuning) -> TimelineResult<Self> {
        let tuning = tuning.validate()?;

        let (Some(min), Some(max)) = (dates.iter().min(), dates.iter().max()) else {
            return Err(TimelineError::InvalidData(
                "time axis cannot be built from empty data".to_owned(),
            ));
        };

        let (start, end) =
            normalize_range(date_to_day_number(*min), date_to_day_number(*max), tuning.min_span_days);
        let span = end - start;
        let left_pad = (span * tuning.left_padding_ratio).max(tuning.min_padding_days);
        let right_pad = (span * tuning.right_padding_ratio).max(tuning.min_padding_days);

        Ok(Self {
            visible_start: start - left_pad,
            visible_end: end + right_pad,
        })
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    /// Maps a date onto `[0, viewport_width]`, clamped at the padded edges.
    pub fn date_to_anchor(self, date: NaiveDate, viewport_width: f64) -> TimelineResult<f64> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "viewport width must be finite and > 0".to_owned(),
            ));
        }

        let span = self.visible_end - self.visible_start;
        let normalized = (date_to_day_number(date) - self.visible_start) / span;
        Ok(normalized.clamp(0.0, 1.0) * viewport_width)
    }

    /// True when the date falls inside the padded visible range.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        let day = date_to_day_number(date);
        day >= self.visible_start && day <= self.visible_end
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if start == end {
        let half = min_span / 2.0;
        (start - half, end + half)
    } else {
        (start.min(end), start.max(end))
    }
}
