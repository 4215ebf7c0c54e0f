pub mod toml_config;

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
pub use cli::{BookArgs, CliConfig, Command, LogFormat, ServiceQuantity};
pub use toml_config::ClientConfig;
