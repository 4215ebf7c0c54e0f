use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A bookable laundry service as published by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub category: String,
    /// Turnaround in hours.
    #[serde(default)]
    pub estimated_time: u32,
}

/// Body of `GET /services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

/// In-progress pickup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub address: String,
    pub building_number: Option<String>,
    pub floor_flat: Option<String>,
    pub landmark: Option<String>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub special_instructions: Option<String>,
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub service_ids: Vec<String>,
    pub quantities: BTreeMap<String, u32>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub special_instructions: String,
    pub customer_name: String,
    pub customer_phone: String,
}

/// What happens when the booking endpoint rejects or never receives a valid booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Log the failure and still complete the wizard.
    #[default]
    BestEffort,
    /// Surface the failure and keep the wizard on the booking step.
    Strict,
}

impl fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => write!(f, "best_effort"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for SubmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "best_effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown submission policy '{}', expected best_effort or strict",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Paging for `GET /bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for BookingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
        }
    }
}
