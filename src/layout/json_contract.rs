use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::layout::engine::LayoutEntry;

pub const LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope handing a computed layout to an external painter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutJsonContractV1 {
    pub schema_version: u32,
    pub person_name: String,
    pub reference_today: NaiveDate,
    pub viewport_width: f64,
    pub entries: Vec<LayoutEntry>,
}

impl LayoutJsonContractV1 {
    #[must_use]
    pub fn new(
        person_name: impl Into<String>,
        reference_today: NaiveDate,
        viewport_width: f64,
        entries: Vec<LayoutEntry>,
    ) -> Self {
        Self {
            schema_version: LAYOUT_JSON_SCHEMA_V1,
            person_name: person_name.into(),
            reference_today,
            viewport_width,
            entries,
        }
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}
