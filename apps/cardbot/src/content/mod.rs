// Read-only datasets: quotes and personal-day forecasts, loaded once at startup.

pub mod models;
pub mod store;

pub use models::{ForecastEntry, Quote};
pub use store::ContentStore;
