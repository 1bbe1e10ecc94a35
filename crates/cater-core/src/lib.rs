pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{CatalogEntry, ServiceCatalog, ServiceId};
pub use config::CaterConfig;
pub use error::{CaterError, Result};
pub use types::*;
