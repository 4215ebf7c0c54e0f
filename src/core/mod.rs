pub mod catalog;
pub mod flow;
pub mod form;
pub mod selection;
pub mod submit;
pub mod wizard;

pub use crate::domain::model::{BookingDraft, BookingPayload, Service, SubmissionPolicy};
pub use crate::domain::ports::{BookingSink, CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
