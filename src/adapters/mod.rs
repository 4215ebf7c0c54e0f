// Adapters layer: the HTTP client for the laundry API and the session it reads credentials from.

pub mod http;
pub mod session;

pub use http::ApiClient;
pub use session::Session;
