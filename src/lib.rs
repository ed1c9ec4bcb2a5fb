//! lifeline-rs: life-event timeline extraction and layout engine.
//!
//! This crate turns semi-structured spreadsheet cells into dated, categorized
//! events and computes a collision-free one-dimensional timeline layout for
//! them. A secondary finance module rebases index price series to percentage
//! change from a reference date and flags projected (post-today) points.

pub mod core;
pub mod error;
pub mod finance;
pub mod ingest;
pub mod layout;
pub mod telemetry;

pub use crate::core::{
    DateResolver, DayMonthPolicy, EventExtractor, NameMatchPolicy, PersonTimeline,
    PersonTimelineBuilder, RawRow, TimelineEvent,
};
pub use error::{TimelineError, TimelineResult};
pub use layout::{LayoutConfig, LayoutEntry, layout_timeline};
