//! Persisted login token.
//!
//! The access token is kept in a small JSON file so a login survives between
//! CLI invocations, the way the web client keeps it in browser storage under
//! a fixed key. Default location is `~/.config/shoplink/credentials.json`,
//! overridable via `SHOPLINK_CREDENTIALS`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or writing the credentials file.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("No config directory available; set SHOPLINK_CREDENTIALS")]
    NoConfigDir,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed credentials file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize)]
struct StoredCredentials {
    access_token: String,
}

/// Handle to the on-disk credentials file.
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    /// Resolve the file location from the environment, falling back to the
    /// platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::NoConfigDir`] when neither the override
    /// nor a config directory is available.
    pub fn from_env() -> Result<Self, CredentialsError> {
        if let Ok(path) = std::env::var("SHOPLINK_CREDENTIALS") {
            return Ok(Self { path: path.into() });
        }
        let mut path = dirs::config_dir().ok_or(CredentialsError::NoConfigDir)?;
        path.push("shoplink");
        path.push("credentials.json");
        Ok(Self { path })
    }

    /// Handle at an explicit location.
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored token, if any. A missing file is simply "not logged
    /// in"; a malformed file is an error so a corrupt token is not silently
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Malformed`] when the file exists but does
    /// not parse.
    pub fn load(&self) -> Result<Option<String>, CredentialsError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CredentialsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let stored: StoredCredentials =
            serde_json::from_str(&raw).map_err(|source| CredentialsError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(stored.access_token))
    }

    /// Persist a token, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Io`] on filesystem failures.
    pub fn store(&self, access_token: &str) -> Result<(), CredentialsError> {
        let io_error = |source| CredentialsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let stored = StoredCredentials {
            access_token: access_token.to_owned(),
        };
        let raw = serde_json::to_string_pretty(&stored).map_err(|source| {
            CredentialsError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(io_error)
    }

    /// Remove the stored token. Removing an absent file is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Io`] on filesystem failures.
    pub fn clear(&self) -> Result<(), CredentialsError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CredentialsError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_load_clear_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = CredentialsFile::at(dir.path().join("nested").join("credentials.json"));

        assert_eq!(file.load().expect("load"), None);

        file.store("tok-123").expect("store");
        assert_eq!(file.load().expect("load").as_deref(), Some("tok-123"));

        file.clear().expect("clear");
        assert_eq!(file.load().expect("load"), None);
        // Clearing twice is fine.
        file.clear().expect("clear again");
    }

    #[test]
    fn malformed_file_is_an_error_not_a_silent_logout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").expect("write");

        let file = CredentialsFile::at(path);
        assert!(matches!(
            file.load(),
            Err(CredentialsError::Malformed { .. })
        ));
    }
}
