use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    token: String,
}

struct Inner {
    cache_dir: PathBuf,
    token: Option<String>,
}

/// Shared handle to the session token.
///
/// Cloning is cheap and every clone sees the same token, which lets the
/// API client invalidate the session (on 401) through the same handle the
/// rest of the application reads from.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<Inner>>,
}

impl Session {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                cache_dir,
                token: None,
            })),
        }
    }

    /// Load a persisted token from disk, if any. Returns whether a token
    /// was found.
    pub fn load(&self) -> Result<bool> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(false);
        }

        let contents =
            std::fs::read_to_string(&path).context("Failed to read session file")?;
        let data: SessionData =
            serde_json::from_str(&contents).context("Failed to parse session file")?;

        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = Some(data.token);
        Ok(true)
    }

    /// Store a new token and persist it to disk.
    pub fn set_token(&self, token: String) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&SessionData {
            token: token.clone(),
        })?;
        std::fs::write(&path, contents).context("Failed to write session file")?;

        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = Some(token);
        Ok(())
    }

    /// Drop the token from memory and disk. Called when the server
    /// rejects the session.
    pub fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session file")?;
        }

        let mut inner = self.inner.write().expect("session lock poisoned");
        if inner.token.take().is_some() {
            debug!("Session token cleared");
        }
        Ok(())
    }

    /// Get the bearer token if one is set.
    pub fn token(&self) -> Option<String> {
        self.inner.read().expect("session lock poisoned").token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").token.is_some()
    }

    fn session_path(&self) -> PathBuf {
        self.inner
            .read()
            .expect("session lock poisoned")
            .cache_dir
            .join(SESSION_FILE)
    }
}
