use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::event::TimelineEvent;
use crate::core::person::PersonTimeline;
use crate::core::time_axis::{TimeAxis, TimeAxisTuning};
use crate::error::{TimelineError, TimelineResult};

/// Which side of the axis a label sits on.
///
/// Sides alternate with the lane number so stacked labels spread both ways
/// instead of towering over the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSide {
    Above,
    Below,
}

/// Label-metric and spacing controls for the lane sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub marker_size: f64,
    pub label_char_width: f64,
    pub label_height: f64,
    pub label_horizontal_padding: f64,
    pub label_gap: f64,
    pub lane_gap: f64,
    pub min_horizontal_gap: f64,
    pub axis_tuning: TimeAxisTuning,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            marker_size: 12.0,
            label_char_width: 7.0,
            label_height: 16.0,
            label_horizontal_padding: 6.0,
            label_gap: 10.0,
            lane_gap: 4.0,
            min_horizontal_gap: 2.0,
            axis_tuning: TimeAxisTuning::default(),
        }
    }
}

impl LayoutConfig {
    fn validate(self) -> TimelineResult<Self> {
        for (value, name) in [
            (self.marker_size, "marker_size"),
            (self.label_char_width, "label_char_width"),
            (self.label_height, "label_height"),
            (self.label_horizontal_padding, "label_horizontal_padding"),
            (self.label_gap, "label_gap"),
            (self.lane_gap, "lane_gap"),
            (self.min_horizontal_gap, "min_horizontal_gap"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "layout config `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    fn lane_step(self) -> f64 {
        self.label_height + self.lane_gap
    }
}

/// Geometry of a placed label, relative to the axis baseline at `top = 0`.
///
/// Negative `top` values extend above the axis. Units follow the caller's
/// viewport width; nothing here assumes pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One renderable placement descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub event: TimelineEvent,
    pub anchor: f64,
    pub lane: usize,
    pub side: LabelSide,
    pub label: LabelGeometry,
    pub is_past: bool,
}

/// Assigns each event of a sorted timeline an anchor, a lane, and a label box.
///
/// Greedy interval-scheduling sweep: events are visited in ascending anchor
/// order (the timeline's sort order), each taking the lowest-numbered lane
/// whose rightmost occupied boundary lies left of the event's label start.
/// The sweep is stable and allocates no more lanes than the greedy order
/// needs; re-running on unchanged input yields identical entries.
///
/// Geometric degeneracy (viewport narrower than one label) still produces a
/// layout; clipping is the renderer's concern, not an error here.
pub fn layout_timeline(
    timeline: &PersonTimeline,
    reference_today: NaiveDate,
    viewport_width: f64,
    config: LayoutConfig,
) -> TimelineResult<Vec<LayoutEntry>> {
    let config = config.validate()?;
    if timeline.events.is_empty() {
        return Ok(Vec::new());
    }

    let dates: Vec<NaiveDate> = timeline.events.iter().map(|event| event.date).collect();
    let axis = TimeAxis::from_dates(&dates, config.axis_tuning)?;

    let mut prepared = Vec::with_capacity(timeline.events.len());
    for (index, event) in timeline.events.iter().enumerate() {
        let width = label_width(&event.title, config);
        let span_half = 0.5 * width.max(config.marker_size);
        let anchor_raw = axis.date_to_anchor(event.date, viewport_width)?;
        let anchor = clamp_anchor(anchor_raw, span_half, viewport_width);
        prepared.push(PreparedEvent {
            index,
            event,
            anchor,
            width,
        });
    }

    // Edge clamping can locally reorder anchors when label widths differ;
    // the sweep itself must still run left to right. Ties keep input order.
    prepared.sort_by(|a, b| {
        OrderedFloat(a.anchor)
            .cmp(&OrderedFloat(b.anchor))
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut lane_last_right: SmallVec<[f64; 8]> = SmallVec::new();
    let mut placed: Vec<Option<LayoutEntry>> = vec![None; timeline.events.len()];

    for item in prepared {
        let left = item.anchor - 0.5 * item.width;
        let right = item.anchor + 0.5 * item.width;
        let lane = allocate_lane(&mut lane_last_right, left, right, config.min_horizontal_gap);
        let side = if lane % 2 == 0 {
            LabelSide::Above
        } else {
            LabelSide::Below
        };
        let tier = lane / 2;
        let clearance =
            0.5 * config.marker_size + config.label_gap + tier as f64 * config.lane_step();
        let top = match side {
            LabelSide::Above => -(clearance + config.label_height),
            LabelSide::Below => clearance,
        };

        trace!(title = %item.event.title, lane, anchor = item.anchor, "placed event");
        placed[item.index] = Some(LayoutEntry {
            event: item.event.clone(),
            anchor: item.anchor,
            lane,
            side,
            label: LabelGeometry {
                text: item.event.title.clone(),
                left,
                top,
                width: item.width,
                height: config.label_height,
            },
            is_past: item.event.date <= reference_today,
        });
    }

    // Every index was visited exactly once, so the flatten is total.
    Ok(placed.into_iter().flatten().collect())
}

#[derive(Debug)]
struct PreparedEvent<'a> {
    index: usize,
    event: &'a TimelineEvent,
    anchor: f64,
    width: f64,
}

fn label_width(text: &str, config: LayoutConfig) -> f64 {
    text.chars().count() as f64 * config.label_char_width
        + 2.0 * config.label_horizontal_padding
}

fn clamp_anchor(anchor: f64, span_half: f64, viewport_width: f64) -> f64 {
    if viewport_width <= 2.0 * span_half {
        viewport_width * 0.5
    } else {
        anchor.clamp(span_half, viewport_width - span_half)
    }
}

fn allocate_lane(last_right: &mut SmallVec<[f64; 8]>, left: f64, right: f64, min_gap: f64) -> usize {
    for (lane, lane_last_right) in last_right.iter_mut().enumerate() {
        if left >= *lane_last_right + min_gap {
            *lane_last_right = right;
            return lane;
        }
    }
    last_right.push(right);
    last_right.len() - 1
}
