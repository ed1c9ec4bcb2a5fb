pub mod catalog;
pub mod compound;
pub mod forecast;
pub mod normalize;
pub mod session;

pub use catalog::IndexCatalog;
pub use compound::{CompoundParams, CompoundPoint, CompoundProjection, simulate_compound};
pub use forecast::{ForecastPoint, estimate_cagr, forecast_from_history};
pub use normalize::{NormalizedSeriesPoint, PricePoint, normalize_series};
pub use session::{RequestSession, RequestTicket};
