use anyhow::Result;
use httpmock::prelude::*;
use laundry_booking::domain::model::{BookingQuery, RegisterRequest};
use laundry_booking::{ApiClient, BookingError, ClientConfig, Session};

fn client_for(server: &MockServer, session: Session) -> ApiClient {
    let mut config = ClientConfig::default();
    config.api.base_url = server.url("/api/");
    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let client = client_for(&server, Session::new());
    let body = client.health().await?;

    mock.assert();
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_login_stores_token_and_attaches_it_afterwards() -> Result<()> {
    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(serde_json::json!({"email": "sara@example.com", "password": "secret"}));
        then.status(200).json_body(serde_json::json!({
            "token": "tok-123",
            "user": {"id": "u1", "name": "Sara", "email": "sara@example.com", "phone": "33000000"}
        }));
    });
    let profile_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/auth/profile")
            .header("Authorization", "Bearer tok-123");
        then.status(200).json_body(serde_json::json!({
            "id": "u1",
            "name": "Sara Ali",
            "email": "sara@example.com",
            "phone": "33000000",
            "address": "Flat 2"
        }));
    });

    let session = Session::new();
    let client = client_for(&server, session.clone());

    let auth = client.login("sara@example.com", "secret").await?;
    assert_eq!(auth.token, "tok-123");
    assert_eq!(session.token().as_deref(), Some("tok-123"));
    assert_eq!(session.user().map(|u| u.name), Some("Sara".to_string()));

    let user = client.profile().await?;
    assert_eq!(user.address.as_deref(), Some("Flat 2"));
    assert_eq!(session.user().map(|u| u.name), Some("Sara Ali".to_string()));

    login_mock.assert();
    profile_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_configured_token_is_sent() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/bookings/b-42")
            .header("Authorization", "Bearer from-config");
        then.status(200).json_body(serde_json::json!({"id": "b-42", "status": "pending"}));
    });

    let mut config = ClientConfig::default();
    config.api.base_url = server.url("/api");
    config.session.token = Some("from-config".to_string());
    let client = ApiClient::new(&config, Session::new())?;

    let booking = client.get_booking("b-42").await?;

    mock.assert();
    assert_eq!(booking["status"], "pending");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_clears_session() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/profile");
        then.status(401);
    });

    let session = Session::with_token("expired");
    let client = client_for(&server, session.clone());

    let err = client.profile().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, BookingError::Unauthorized));
    assert!(!session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn test_register() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/register").json_body(serde_json::json!({
            "name": "Sara",
            "email": "sara@example.com",
            "password": "secret",
            "phone": "33000000"
        }));
        then.status(201).json_body(serde_json::json!({"token": "new-token"}));
    });

    let session = Session::new();
    let client = client_for(&server, session.clone());
    let request = RegisterRequest {
        name: "Sara".to_string(),
        email: "sara@example.com".to_string(),
        password: "secret".to_string(),
        phone: "33000000".to_string(),
        address: None,
    };

    client.register(&request).await?;

    mock.assert();
    assert_eq!(session.token().as_deref(), Some("new-token"));
    assert!(session.user().is_none());
    Ok(())
}

#[tokio::test]
async fn test_services_by_category() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/services")
            .query_param("category", "ironing");
        then.status(200).json_body(serde_json::json!({
            "services": [{
                "id": "3",
                "name": "Ironing Service",
                "price": 30,
                "currency": "AED",
                "category": "ironing",
                "estimated_time": 24
            }]
        }));
    });

    let client = client_for(&server, Session::new());
    let services = client.services_by_category("ironing").await?;

    mock.assert();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].description, "");
    Ok(())
}

#[tokio::test]
async fn test_list_bookings_sends_paging() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/bookings")
            .query_param("page", "2")
            .query_param("limit", "5")
            .query_param("status", "pending");
        then.status(200).json_body(serde_json::json!({"bookings": [], "total": 0}));
    });

    let client = client_for(&server, Session::new());
    let query = BookingQuery {
        page: 2,
        limit: 5,
        status: Some("pending".to_string()),
    };
    let body = client.list_bookings(&query).await?;

    mock.assert();
    assert_eq!(body["total"], 0);
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(503);
    });

    let client = client_for(&server, Session::new());
    let err = client.list_services().await.unwrap_err();

    match err {
        BookingError::HttpStatusError { status, endpoint } => {
            assert_eq!(status, 503);
            assert_eq!(endpoint, "/services");
        }
        other => panic!("unexpected error: {}", other),
    }
    Ok(())
}
