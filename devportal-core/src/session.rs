//! Passive session presence.
//!
//! The gate only checks whether a user is cached in client storage for an
//! environment. It never talks to the backend, so a present session may still
//! hold an expired token; the pages behind the gate deal with that.

use crate::storage::{KeyValueStore, USER_KEY_PREFIX};
use serde::{Deserialize, Serialize};

/// Identity cached by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub remember: bool,
}

impl SessionInfo {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scopes: Vec::new(),
            remember: false,
        }
    }
}

/// Outcome of the gate for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(SessionInfo),
    Anonymous,
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn user(&self) -> Option<&SessionInfo> {
        match self {
            Self::Authenticated(info) => Some(info),
            Self::Anonymous => None,
        }
    }
}

/// Storage key of the cached user for `environment`.
#[must_use]
pub fn session_key(environment: &str) -> String {
    format!("{USER_KEY_PREFIX}{environment}")
}

/// Look up the cached session for `environment`. Entries that do not parse
/// are treated as absent.
pub fn session_for<S: KeyValueStore + ?Sized>(store: &S, environment: &str) -> SessionState {
    let Some(raw) = store.get(&session_key(environment)) else {
        return SessionState::Anonymous;
    };
    match serde_json::from_str::<SessionInfo>(&raw) {
        Ok(info) => SessionState::Authenticated(info),
        Err(err) => {
            log::warn!("Ignoring unreadable cached user for {environment}: {err}");
            SessionState::Anonymous
        }
    }
}

#[must_use]
pub fn has_session<S: KeyValueStore + ?Sized>(store: &S, environment: &str) -> bool {
    session_for(store, environment).is_authenticated()
}
