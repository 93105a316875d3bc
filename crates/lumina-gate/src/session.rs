//! Password check and session lifecycle.
//!
//! A successful password entry writes two keys to the session store: an
//! authenticated flag and the authentication timestamp. Expiry is measured
//! against that timestamp on every check, so a stale session is detected
//! and cleared the next time anything asks.

use crate::store::SessionStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key for the authenticated flag
pub const SESSION_KEY: &str = "lumina_auth";

/// Store key for the authentication timestamp
pub const SESSION_TIME_KEY: &str = "lumina_auth_time";

/// Default session lifetime: 24 hours
pub const DEFAULT_SESSION_DURATION_SECS: u64 = 24 * 60 * 60;

/// Gate configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Shared access password
    pub password: String,

    /// Session lifetime in seconds
    #[serde(default = "default_session_duration")]
    pub session_duration_secs: u64,
}

fn default_session_duration() -> u64 {
    DEFAULT_SESSION_DURATION_SECS
}

impl GateConfig {
    /// Create a config with the default 24-hour session lifetime
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            session_duration_secs: default_session_duration(),
        }
    }
}

// Keep the password out of logs
impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("password", &"<redacted>")
            .field("session_duration_secs", &self.session_duration_secs)
            .finish()
    }
}

/// Gate errors
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("wrong password")]
    WrongPassword,

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("session expired")]
    SessionExpired,
}

/// Password gate over a session store
#[derive(Clone, Debug)]
pub struct SessionGate<S: SessionStore> {
    config: GateConfig,
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    /// Create a gate over a session store
    pub fn new(config: GateConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Check a password attempt at the given time. Surrounding whitespace
    /// on the input is ignored. A correct password opens a session; a wrong
    /// one leaves the store untouched.
    pub fn authenticate(&mut self, input: &str, now: i64) -> Result<(), GateError> {
        if input.trim() != self.config.password {
            log::debug!("password attempt rejected");
            return Err(GateError::WrongPassword);
        }

        self.store.set(SESSION_KEY, "true");
        self.store.set(SESSION_TIME_KEY, &now.to_string());
        log::debug!("session opened");
        Ok(())
    }

    /// Whether an unexpired session is open at the given time
    pub fn is_authenticated(&self, now: i64) -> bool {
        let auth = self.store.get(SESSION_KEY);
        let auth_time = self
            .store
            .get(SESSION_TIME_KEY)
            .and_then(|t| t.parse::<i64>().ok());

        match (auth, auth_time) {
            (Some(flag), Some(opened_at)) => {
                flag == "true" && self.session_age(opened_at, now) <= self.config.session_duration_secs
            }
            _ => false,
        }
    }

    /// Verify the session, clearing it if it has expired
    pub fn check(&mut self, now: i64) -> Result<(), GateError> {
        let opened_at = match self.store.get(SESSION_TIME_KEY) {
            Some(t) => t.parse::<i64>().map_err(|_| GateError::NotAuthenticated)?,
            None => return Err(GateError::NotAuthenticated),
        };

        if self.store.get(SESSION_KEY).as_deref() != Some("true") {
            return Err(GateError::NotAuthenticated);
        }

        if self.session_age(opened_at, now) > self.config.session_duration_secs {
            log::debug!("session expired, clearing");
            self.logout();
            return Err(GateError::SessionExpired);
        }

        Ok(())
    }

    /// Close the session
    pub fn logout(&mut self) {
        self.store.remove(SESSION_KEY);
        self.store.remove(SESSION_TIME_KEY);
    }

    /// [`Self::authenticate`] against the wall clock
    pub fn authenticate_now(&mut self, input: &str) -> Result<(), GateError> {
        self.authenticate(input, chrono::Utc::now().timestamp())
    }

    /// [`Self::is_authenticated`] against the wall clock
    pub fn is_authenticated_now(&self) -> bool {
        self.is_authenticated(chrono::Utc::now().timestamp())
    }

    /// [`Self::check`] against the wall clock
    pub fn check_now(&mut self) -> Result<(), GateError> {
        self.check(chrono::Utc::now().timestamp())
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn session_age(&self, opened_at: i64, now: i64) -> u64 {
        now.saturating_sub(opened_at).max(0) as u64
    }
}
