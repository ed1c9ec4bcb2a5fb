pub mod engine;
pub mod json_contract;
pub mod palette;

pub use engine::{LabelGeometry, LabelSide, LayoutConfig, LayoutEntry, layout_timeline};
pub use json_contract::{LAYOUT_JSON_SCHEMA_V1, LayoutJsonContractV1};
pub use palette::CategoryPalette;
