use nextdns_allow_application::services::RateLimiter;
use nextdns_allow_application::use_cases::AddToAllowlistUseCase;
use nextdns_allow_domain::{AllowlistError, Credentials, DispatchRequest};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{MockAllowlistApi, MockClock, MockCredentialStore};

struct Fixture {
    use_case: AddToAllowlistUseCase,
    api: MockAllowlistApi,
    store: MockCredentialStore,
    clock: MockClock,
}

fn fixture_with_store(store: MockCredentialStore) -> Fixture {
    let api = MockAllowlistApi::new();
    let clock = MockClock::new(1_700_000_000_000);
    let limiter = Arc::new(RateLimiter::new(
        Arc::new(clock.clone()),
        Duration::from_millis(1000),
    ));
    let use_case = AddToAllowlistUseCase::new(
        Arc::new(api.clone()),
        Arc::new(store.clone()),
        limiter,
    );

    Fixture {
        use_case,
        api,
        store,
        clock,
    }
}

fn fixture() -> Fixture {
    fixture_with_store(MockCredentialStore::configured())
}

#[tokio::test]
async fn test_sanitized_domain_reaches_api() {
    let f = fixture();

    let result = f.use_case.execute("www.Example.com").await;

    assert_eq!(result, Ok(None));
    let calls = f.api.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].domain, "example.com");
    assert_eq!(calls[0].credentials, Credentials::new("test-api-key", "abc123"));
}

#[tokio::test]
async fn test_payload_is_forwarded_verbatim() {
    let f = fixture();
    f.api
        .set_add_response(Ok(Some(json!({"id": "example.com", "active": true}))))
        .await;

    let result = f.use_case.execute("example.com").await;

    assert_eq!(result, Ok(Some(json!({"id": "example.com", "active": true}))));
}

#[tokio::test]
async fn test_api_failure_is_forwarded_verbatim() {
    let f = fixture();
    f.api
        .set_add_response(Err(AllowlistError::Api {
            status: 403,
            message: "Invalid API key".to_string(),
        }))
        .await;

    let err = f.use_case.execute("example.com").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test]
async fn test_invalid_domain_stops_before_rate_check() {
    let f = fixture();

    let err = f.use_case.execute("not a domain").await.unwrap_err();
    assert_eq!(err, AllowlistError::InvalidDomain);
    assert_eq!(f.api.call_count().await, 0);

    // The rejected request did not consume the rate limit window.
    assert!(f.use_case.execute("example.com").await.is_ok());
}

#[tokio::test]
async fn test_second_request_within_interval_is_throttled() {
    let f = fixture();

    assert!(f.use_case.execute("example.com").await.is_ok());
    f.clock.advance(Duration::from_millis(500));
    let err = f.use_case.execute("example.org").await.unwrap_err();

    assert_eq!(err, AllowlistError::RateLimited);
    assert_eq!(err.to_string(), "Please wait a moment before trying again");
    assert_eq!(f.api.call_count().await, 1);
}

#[tokio::test]
async fn test_request_after_interval_is_accepted() {
    let f = fixture();

    assert!(f.use_case.execute("example.com").await.is_ok());
    f.clock.advance(Duration::from_millis(1000));
    assert!(f.use_case.execute("example.com").await.is_ok());

    // Same domain twice is not coalesced.
    assert_eq!(f.api.call_count().await, 2);
}

#[tokio::test]
async fn test_stored_credentials_passed_through_and_client_failure_forwarded() {
    let f = fixture_with_store(MockCredentialStore::with_credentials(Credentials::new(
        "", "abc123",
    )));
    f.api
        .set_add_response(Err(AllowlistError::MissingCredentials))
        .await;

    let err = f.use_case.execute("example.com").await.unwrap_err();

    assert_eq!(err, AllowlistError::MissingCredentials);
    assert_eq!(
        err.to_string(),
        "API key or profile ID not configured. Please check settings."
    );
    let calls = f.api.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].credentials, Credentials::new("", "abc123"));
}

#[tokio::test]
async fn test_store_failure_is_reported() {
    let f = fixture();
    f.store.set_should_fail(true).await;

    let err = f.use_case.execute("example.com").await.unwrap_err();

    assert!(matches!(err, AllowlistError::Storage(_)));
    assert_eq!(f.api.call_count().await, 0);
}

// ── dispatch contract ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dispatch_success_response() {
    let f = fixture();
    f.api
        .set_add_response(Ok(Some(json!({"id": "example.com"}))))
        .await;

    let response = f
        .use_case
        .dispatch(DispatchRequest::add_to_allowlist("www.example.com"))
        .await;

    assert!(response.success);
    assert_eq!(response.data, Some(json!({"id": "example.com"})));
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_dispatch_invalid_domain_response() {
    let f = fixture();

    let response = f
        .use_case
        .dispatch(DispatchRequest::add_to_allowlist("bad_domain"))
        .await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Invalid domain format"));
}

#[tokio::test]
async fn test_dispatch_non_string_domain_is_invalid() {
    let f = fixture();
    let request = serde_json::from_value(json!({"action": "addToAllowlist", "domain": 7})).unwrap();

    let response = f.use_case.dispatch(request).await;

    assert_eq!(response.error.as_deref(), Some("Invalid domain format"));
    assert_eq!(f.api.call_count().await, 0);
}

#[tokio::test]
async fn test_dispatch_unknown_action() {
    let f = fixture();
    let request =
        serde_json::from_value(json!({"action": "removeFromAllowlist", "domain": "example.com"}))
            .unwrap();

    let response = f.use_case.dispatch(request).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Unsupported action: removeFromAllowlist")
    );
    assert_eq!(f.api.call_count().await, 0);
}

#[tokio::test]
async fn test_dispatch_missing_credentials_message() {
    let f = fixture_with_store(MockCredentialStore::new());

    let response = f
        .use_case
        .dispatch(DispatchRequest::add_to_allowlist("example.com"))
        .await;

    assert_eq!(
        response.error.as_deref(),
        Some("API key or profile ID not configured. Please check settings.")
    );
}
