//! Calendar fetching and normalisation

pub mod normalize;
pub mod ports;
pub mod service;

pub use ports::CalendarFetcher;
pub use service::{CalendarFetchers, CalendarService};
