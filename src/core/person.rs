use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::event::TimelineEvent;

/// How free-text person names are matched when grouping.
///
/// Input names are free text, so exact matching is a policy choice rather
/// than an obviously correct one; the alternatives are kept here so the
/// decision can be revisited without touching the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NameMatchPolicy {
    #[default]
    Exact,
    Trimmed,
    CaseInsensitive,
}

impl NameMatchPolicy {
    #[must_use]
    pub fn canonical(self, name: &str) -> String {
        match self {
            Self::Exact => name.to_owned(),
            Self::Trimmed => name.trim().to_owned(),
            Self::CaseInsensitive => name.trim().to_lowercase(),
        }
    }
}

/// All events for one person, sorted ascending by date.
///
/// Same-date events keep their extraction order (stable sort), which makes
/// downstream lane assignment deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTimeline {
    pub person_name: String,
    pub events: Vec<TimelineEvent>,
}

impl PersonTimeline {
    /// Earliest event date; used as the finance reference date.
    #[must_use]
    pub fn reference_date(&self) -> Option<chrono::NaiveDate> {
        self.events.first().map(|event| event.date)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonTimelineBuilder {
    policy: NameMatchPolicy,
}

impl PersonTimelineBuilder {
    #[must_use]
    pub fn new(policy: NameMatchPolicy) -> Self {
        Self { policy }
    }

    /// Groups events by person and sorts each group ascending by date.
    ///
    /// The returned map preserves first-seen person order; an empty input
    /// yields an empty map. The displayed `person_name` is taken from the
    /// first event of each group, before canonicalization.
    #[must_use]
    pub fn build(&self, events: Vec<TimelineEvent>) -> IndexMap<String, PersonTimeline> {
        let mut timelines: IndexMap<String, PersonTimeline> = IndexMap::new();

        for event in events {
            let key = self.policy.canonical(&event.person_name);
            timelines
                .entry(key)
                .or_insert_with(|| PersonTimeline {
                    person_name: event.person_name.clone(),
                    events: Vec::new(),
                })
                .events
                .push(event);
        }

        for timeline in timelines.values_mut() {
            // Vec::sort_by is stable, so equal dates keep extraction order.
            timeline.events.sort_by(|a, b| a.date.cmp(&b.date));
        }

        timelines
    }
}
