pub mod api;
pub mod cache;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod stats;
pub mod upstream;
pub mod utils;

pub use compare::{CompareMode, CompareService};
pub use dataset::DatasetAccessor;
pub use error::StatsError;
pub use stats::{SortField, StatsService};
