use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};

/// Ordering assumed for `a/b/YYYY` tokens where both readings are calendar-valid.
///
/// The source data is dominated by day-first entries, so `DayFirst` is the
/// default. This is a policy choice, not a fact about the data; it is
/// injectable and covered by tests rather than assumed correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DayMonthPolicy {
    #[default]
    DayFirst,
    MonthFirst,
}

/// Parses single date tokens of unknown surface format.
///
/// Accepted shapes, with `/` or `-` as separator:
/// - `YYYY-MM-DD` (always unambiguous, preferred when matched)
/// - `D/M/YYYY` and `M/D/YYYY`
///
/// Ambiguous slash/dash tokens are resolved against the hint learned from the
/// first unambiguous slash/dash date seen in the same document, falling back
/// to the configured [`DayMonthPolicy`].
#[derive(Debug, Clone)]
pub struct DateResolver {
    policy: DayMonthPolicy,
    hint: Option<DayMonthPolicy>,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new(DayMonthPolicy::default())
    }
}

impl DateResolver {
    #[must_use]
    pub fn new(policy: DayMonthPolicy) -> Self {
        Self { policy, hint: None }
    }

    /// Ordering inferred from previously resolved unambiguous tokens, if any.
    #[must_use]
    pub fn hint(&self) -> Option<DayMonthPolicy> {
        self.hint
    }

    /// Forgets the learned ordering hint. Call between documents.
    pub fn reset_hint(&mut self) {
        self.hint = None;
    }

    pub fn resolve(&mut self, token: &str) -> TimelineResult<NaiveDate> {
        let trimmed = token.trim();
        let parts: Vec<&str> = trimmed.split(['/', '-']).collect();
        if parts.len() != 3 {
            return Err(self.parse_error(token));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(self.parse_error(token));
            }
            *slot = part.parse().map_err(|_| self.parse_error(token))?;
        }
        let [first, second, third] = numbers;

        if first > 999 {
            // YYYY-M-D, no ambiguity branch.
            return self
                .build_date(first as i32, second, third)
                .ok_or_else(|| self.parse_error(token));
        }
        if third <= 999 {
            // Two-digit years are out of contract.
            return Err(self.parse_error(token));
        }

        let year = third as i32;
        let day_first = self.build_date(year, second, first);
        let month_first = self.build_date(year, first, second);

        let resolved = match (day_first, month_first) {
            (Some(date), None) => {
                self.learn(DayMonthPolicy::DayFirst);
                Some(date)
            }
            (None, Some(date)) => {
                self.learn(DayMonthPolicy::MonthFirst);
                Some(date)
            }
            (Some(df), Some(mf)) => match self.hint.unwrap_or(self.policy) {
                DayMonthPolicy::DayFirst => Some(df),
                DayMonthPolicy::MonthFirst => Some(mf),
            },
            (None, None) => None,
        };

        resolved.ok_or_else(|| self.parse_error(token))
    }

    fn build_date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn learn(&mut self, ordering: DayMonthPolicy) {
        if self.hint.is_none() {
            debug!(?ordering, "learned day/month ordering from unambiguous token");
            self.hint = Some(ordering);
        }
    }

    fn parse_error(&self, token: &str) -> TimelineError {
        TimelineError::DateParse {
            token: token.trim().to_owned(),
        }
    }
}
