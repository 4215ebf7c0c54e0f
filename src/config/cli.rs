use crate::config::toml_config::ClientConfig;
use crate::core::SubmissionPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{parse_pickup_date, parse_pickup_time};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "laundry-booking")]
#[command(about = "Browse laundry services and book a pickup")]
pub struct CliConfig {
    /// Path to a TOML configuration file (defaults to LAUNDRY_* environment variables)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the laundry API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Bearer token for an existing session
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Report booking submission failures instead of confirming anyway
    #[arg(long, global = true)]
    pub strict: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List bookable services
    Services {
        #[arg(long)]
        category: Option<String>,
    },
    /// Select services and book a pickup
    Book(BookArgs),
    /// Check that the API is reachable
    Health,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Show the profile of the logged-in customer
    Profile,
    /// List your bookings
    Bookings {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one booking
    Booking { id: String },
}

#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    /// Service to book, as ID or ID:QUANTITY (repeatable)
    #[arg(short, long = "service", value_parser = parse_service_quantity)]
    pub services: Vec<ServiceQuantity>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Street address or flat description
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub building: Option<String>,

    #[arg(long)]
    pub floor_flat: Option<String>,

    #[arg(long)]
    pub landmark: Option<String>,

    /// Pickup date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_pickup_date)]
    pub date: Option<String>,

    /// Pickup time (HH:MM, 24h)
    #[arg(long, value_parser = parse_pickup_time)]
    pub time: Option<String>,

    #[arg(long)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceQuantity {
    pub id: String,
    pub quantity: i64,
}

fn parse_service_quantity(value: &str) -> std::result::Result<ServiceQuantity, String> {
    let (id, quantity) = match value.split_once(':') {
        Some((id, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity in '{}'", value))?;
            (id, quantity)
        }
        None => (value, 1),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing service id in '{}'", value));
    }
    Ok(ServiceQuantity {
        id: id.to_string(),
        quantity,
    })
}

impl CliConfig {
    /// Loads the file (or environment) configuration and applies the
    /// command-line overrides on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if let Some(token) = &self.token {
            config.session.token = Some(token.clone());
        }
        if self.strict {
            config.booking.submission_policy = SubmissionPolicy::Strict;
        }

        Ok(config)
    }
}
