use async_trait::async_trait;
use nextdns_allow_application::ports::CredentialStore;
use nextdns_allow_domain::{Credentials, DomainError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const API_KEY_FIELD: &str = "nextdns_api_key";
const PROFILE_ID_FIELD: &str = "nextdns_profile_id";

#[derive(Deserialize, Default)]
struct StoredCredentials {
    #[serde(default)]
    nextdns_api_key: String,
    #[serde(default)]
    nextdns_profile_id: String,
}

/// Credentials kept in a small TOML file.
///
/// Saving edits the two keys in place, so comments and any other keys in the file
/// are preserved. A missing file reads as empty credentials.
pub struct TomlCredentialStore {
    path: PathBuf,
}

impl TomlCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_existing(&self) -> Result<Option<String>, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::StorageError(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl CredentialStore for TomlCredentialStore {
    async fn load(&self) -> Result<Credentials, DomainError> {
        let Some(contents) = self.read_existing().await? else {
            debug!(path = %self.path.display(), "No credentials file yet");
            return Ok(Credentials::default());
        };

        let stored: StoredCredentials = toml::from_str(&contents).map_err(|e| {
            DomainError::StorageError(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(Credentials::new(
            stored.nextdns_api_key,
            stored.nextdns_profile_id,
        ))
    }

    async fn save(&self, credentials: &Credentials) -> Result<(), DomainError> {
        let existing = self.read_existing().await?.unwrap_or_default();
        let mut doc = existing.parse::<toml_edit::DocumentMut>().map_err(|e| {
            DomainError::StorageError(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        doc[API_KEY_FIELD] = toml_edit::value(credentials.api_key.as_str());
        doc[PROFILE_ID_FIELD] = toml_edit::value(credentials.profile_id.as_str());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::StorageError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        tokio::fs::write(&self.path, doc.to_string())
            .await
            .map_err(|e| {
                DomainError::StorageError(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        restrict_permissions(&self.path).await?;

        debug!(path = %self.path.display(), "Credentials written");
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), DomainError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| {
            DomainError::StorageError(format!(
                "Failed to set permissions on {}: {}",
                path.display(),
                e
            ))
        })
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), DomainError> {
    Ok(())
}
