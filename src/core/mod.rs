pub mod date;
pub mod event;
pub mod extract;
pub mod person;
pub mod primitives;
pub mod time_axis;

pub use date::{DateResolver, DayMonthPolicy};
pub use event::{RawRow, TimelineEvent};
pub use extract::{EventExtractor, UNCATEGORIZED};
pub use person::{NameMatchPolicy, PersonTimeline, PersonTimelineBuilder};
pub use time_axis::{TimeAxis, TimeAxisTuning};
