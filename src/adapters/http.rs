use crate::adapters::session::Session;
use crate::core::{BookingPayload, BookingSink, CatalogSource, ConfigProvider, Service};
use crate::domain::model::{
    AuthResponse, BookingQuery, LoginRequest, RegisterRequest, ServiceList, User,
};
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Client for the laundry REST API.
///
/// Attaches `Authorization: Bearer <token>` whenever the session holds a
/// token and logs the session out on any 401.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        if let Some(token) = config.auth_token() {
            session.login(token, session.user());
        }

        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response> {
        tracing::debug!("📡 Calling {}", path);
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} answered {}", path, status);

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session rejected by the API, logging out");
            self.session.logout();
            return Err(BookingError::Unauthorized);
        }
        if !status.is_success() {
            return Err(BookingError::HttpStatusError {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path), path).await?;
        Ok(response.json().await?)
    }

    pub async fn health(&self) -> Result<serde_json::Value> {
        self.get_json("/health").await
    }

    /// Logs in and stores the returned token and user in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let path = "/auth/login";
        let response = self
            .send(self.request(Method::POST, path).json(&body), path)
            .await?;
        let auth: AuthResponse = response.json().await?;
        self.session.login(auth.token.clone(), auth.user.clone());
        tracing::info!("🔑 Logged in as {}", email);
        Ok(auth)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let path = "/auth/register";
        let response = self
            .send(self.request(Method::POST, path).json(request), path)
            .await?;
        let auth: AuthResponse = response.json().await?;
        self.session.login(auth.token.clone(), auth.user.clone());
        tracing::info!("🔑 Registered {}", request.email);
        Ok(auth)
    }

    pub async fn profile(&self) -> Result<User> {
        let user: User = self.get_json("/auth/profile").await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let list: ServiceList = self.get_json("/services").await?;
        Ok(list.services)
    }

    pub async fn services_by_category(&self, category: &str) -> Result<Vec<Service>> {
        let path = "/services";
        let builder = self
            .request(Method::GET, path)
            .query(&[("category", category)]);
        let list: ServiceList = self.send(builder, path).await?.json().await?;
        Ok(list.services)
    }

    /// Posts a booking. The response body is not read.
    pub async fn create_booking(&self, payload: &BookingPayload) -> Result<()> {
        let path = "/bookings";
        self.send(self.request(Method::POST, path).json(payload), path)
            .await?;
        Ok(())
    }

    pub async fn list_bookings(&self, query: &BookingQuery) -> Result<serde_json::Value> {
        let path = "/bookings";
        let builder = self.request(Method::GET, path).query(query);
        Ok(self.send(builder, path).await?.json().await?)
    }

    pub async fn get_booking(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(&format!("/bookings/{}", id)).await
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        self.list_services().await
    }
}

#[async_trait]
impl BookingSink for ApiClient {
    async fn submit_booking(&self, payload: &BookingPayload) -> Result<()> {
        self.create_booking(payload).await
    }
}
