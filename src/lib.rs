pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ApiClient, Session};
pub use config::ClientConfig;
pub use crate::core::{catalog::CatalogOrigin, flow::BookingFlow, wizard::WizardStep};
pub use utils::error::{BookingError, Result};
