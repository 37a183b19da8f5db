pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod parser;
pub mod pipeline;
pub mod types;

// Ports the pipeline depends on, and their production adapters
pub mod app;
pub mod infra;

pub use error::{CatalogError, Result};
pub use pipeline::{CatalogBuilder, ModFolderAggregator};
pub use types::{Catalog, GameRecord, Lookup, ModRecord};
