pub mod csv;
pub mod mortality;

pub use self::csv::{load_events, read_raw_rows};
pub use mortality::read_mortality_table;
