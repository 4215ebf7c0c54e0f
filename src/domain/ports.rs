use crate::domain::model::{BookingPayload, Service, SubmissionPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn submission_policy(&self) -> SubmissionPolicy;
    fn auth_token(&self) -> Option<&str>;
}

/// Read side of the remote API: the list of bookable services.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<Service>>;
}

/// Write side of the remote API: accepts one finished booking.
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn submit_booking(&self, payload: &BookingPayload) -> Result<()>;
}
