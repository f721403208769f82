#![allow(dead_code)]

use async_trait::async_trait;
use nextdns_allow_application::ports::{AllowlistApi, Clock, CredentialStore};
use nextdns_allow_domain::{AllowlistResult, ConnectionError, Credentials, Domain, DomainError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub domain: String,
    pub credentials: Credentials,
}

/// Allowlist API double that records every call and answers with a preset result.
#[derive(Clone)]
pub struct MockAllowlistApi {
    add_response: Arc<RwLock<AllowlistResult>>,
    verify_response: Arc<RwLock<Result<(), ConnectionError>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    verify_calls: Arc<RwLock<Vec<Credentials>>>,
}

impl MockAllowlistApi {
    pub fn new() -> Self {
        Self {
            add_response: Arc::new(RwLock::new(Ok(None))),
            verify_response: Arc::new(RwLock::new(Ok(()))),
            calls: Arc::new(RwLock::new(Vec::new())),
            verify_calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_add_response(&self, response: AllowlistResult) {
        *self.add_response.write().await = response;
    }

    pub async fn set_verify_response(&self, response: Result<(), ConnectionError>) {
        *self.verify_response.write().await = response;
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    pub async fn verify_calls(&self) -> Vec<Credentials> {
        self.verify_calls.read().await.clone()
    }
}

impl Default for MockAllowlistApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AllowlistApi for MockAllowlistApi {
    async fn add_domain(&self, domain: &Domain, credentials: &Credentials) -> AllowlistResult {
        self.calls.write().await.push(RecordedCall {
            domain: domain.as_str().to_string(),
            credentials: credentials.clone(),
        });
        self.add_response.read().await.clone()
    }

    async fn verify_profile(&self, credentials: &Credentials) -> Result<(), ConnectionError> {
        self.verify_calls.write().await.push(credentials.clone());
        self.verify_response.read().await.clone()
    }
}

#[derive(Clone)]
pub struct MockCredentialStore {
    credentials: Arc<RwLock<Credentials>>,
    should_fail: Arc<RwLock<bool>>,
    saves: Arc<AtomicU64>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self::with_credentials(Credentials::default())
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(credentials)),
            should_fail: Arc::new(RwLock::new(false)),
            saves: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn configured() -> Self {
        Self::with_credentials(Credentials::new("test-api-key", "abc123"))
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn current(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn load(&self) -> Result<Credentials, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::StorageError("mock store unavailable".to_string()));
        }
        Ok(self.credentials.read().await.clone())
    }

    async fn save(&self, credentials: &Credentials) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::StorageError("mock store unavailable".to_string()));
        }
        *self.credentials.write().await = credentials.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Manually driven clock shared between clones.
#[derive(Debug, Clone)]
pub struct MockClock {
    now_ms: Arc<AtomicU64>,
}

impl MockClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
