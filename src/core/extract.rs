use tracing::debug;

use crate::core::date::DateResolver;
use crate::core::event::TimelineEvent;

/// Sentinel category assigned to clauses that never name one.
pub const UNCATEGORIZED: &str = "senza categoria";

/// Field classes recognized inside a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Title,
    Category,
    Date,
}

impl FieldKey {
    /// Case-insensitive match over the localized field-name aliases.
    fn match_name(name: &str) -> Option<Self> {
        let folded = name.trim().trim_end_matches('?').to_lowercase();
        match folded.as_str() {
            "titolo" | "titolo evento" | "title" => Some(Self::Title),
            "categoria" | "category" => Some(Self::Category),
            "data" | "data evento" | "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// One partially assembled clause during the segment walk.
#[derive(Debug, Default)]
struct ClauseDraft {
    title: Option<String>,
    category: Option<String>,
    date_token: Option<String>,
}

impl ClauseDraft {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.date_token.is_none()
    }

    fn has(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::Title => self.title.is_some(),
            FieldKey::Category => self.category.is_some(),
            FieldKey::Date => self.date_token.is_some(),
        }
    }

    fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Title => self.title = Some(value),
            FieldKey::Category => self.category = Some(value),
            FieldKey::Date => self.date_token = Some(value),
        }
    }
}

/// Splits one free-text cell into zero or more structured events.
///
/// The cell grammar is comma/newline-separated `Key: Value` segments; a new
/// clause starts whenever a field class repeats. Malformed clauses (missing
/// title or date, or an unparseable date token) are skipped individually, so
/// extraction never fails and partial success per cell is the norm.
///
/// The extractor owns the document-level [`DateResolver`] so the day/month
/// ordering hint learned in one cell carries to the next.
#[derive(Debug, Default)]
pub struct EventExtractor {
    resolver: DateResolver,
}

impl EventExtractor {
    #[must_use]
    pub fn new(resolver: DateResolver) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &DateResolver {
        &self.resolver
    }

    pub fn extract(&mut self, cell_text: &str, person_name: &str) -> Vec<TimelineEvent> {
        let mut events = Vec::new();
        let mut draft = ClauseDraft::default();

        for segment in cell_text.split([',', '\n']) {
            let Some((name, value)) = segment.split_once(':') else {
                continue;
            };
            let Some(key) = FieldKey::match_name(name) else {
                // Unrecognized keys (costs, dependents, ...) are not ours.
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if draft.has(key) {
                self.flush(&mut draft, person_name, &mut events);
            }
            draft.set(key, value.to_owned());
        }
        self.flush(&mut draft, person_name, &mut events);

        events
    }

    fn flush(&mut self, draft: &mut ClauseDraft, person_name: &str, events: &mut Vec<TimelineEvent>) {
        let draft = std::mem::take(draft);
        if draft.is_empty() {
            return;
        }
        let (Some(title), Some(token)) = (draft.title, draft.date_token) else {
            debug!(person = person_name, "clause missing title or date, skipped");
            return;
        };
        match self.resolver.resolve(&token) {
            Ok(date) => events.push(TimelineEvent::new(
                title,
                draft.category.unwrap_or_else(|| UNCATEGORIZED.to_owned()),
                date,
                person_name,
            )),
            Err(error) => {
                debug!(person = person_name, %error, "clause dropped");
            }
        }
    }
}
