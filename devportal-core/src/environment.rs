//! Deployment environments and `?environment=` switching.

use crate::config::ConfigProvider;
use crate::storage::{ENVIRONMENT_KEY, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Label of the environment used before any switch has been persisted.
pub const DEFAULT_ENVIRONMENT: &str = "Default";

/// Query parameter that requests an environment switch.
pub const ENVIRONMENT_PARAM: &str = "environment";

/// One deployment target. Connection parameters are opaque to the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub label: String,
    #[serde(flatten)]
    pub connection: Map<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            connection: Map::new(),
        }
    }

    #[must_use]
    pub fn default_environment() -> Self {
        Self::named(DEFAULT_ENVIRONMENT)
    }
}

/// Environments known to this page view, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentCatalog {
    entries: Vec<Environment>,
}

impl EnvironmentCatalog {
    /// Build a catalog, keeping the first entry for any repeated label.
    #[must_use]
    pub fn from_entries(entries: Vec<Environment>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|env| {
                let fresh = seen.insert(env.label.clone());
                if !fresh {
                    log::debug!("Ignoring duplicate environment label {}", env.label);
                }
                fresh
            })
            .collect();
        Self { entries }
    }

    /// Fetch the catalog from `provider`. A failed fetch is logged and yields an
    /// empty catalog, which turns every switch request into a no-op.
    #[allow(clippy::future_not_send)]
    pub async fn load<P: ConfigProvider>(provider: &P) -> Self {
        match provider.environments().await {
            Ok(entries) => {
                let catalog = Self::from_entries(entries);
                log::debug!("Loaded {} environment(s)", catalog.len());
                catalog
            }
            Err(err) => {
                log::error!("Error while receiving environment configurations: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|env| env.label == label)
    }

    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Environment> {
        self.position(label).map(|idx| &self.entries[idx])
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|env| env.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extract the `environment` value from a query string. Accepts the raw
/// `?a=b` form as well as an already-stripped `a=b`. Empty values count as
/// absent.
#[must_use]
pub fn environment_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ENVIRONMENT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Query string that switches to `label`, e.g. `?environment=us-east`.
#[must_use]
pub fn environment_query(label: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(ENVIRONMENT_PARAM, label)
        .finish();
    format!("?{encoded}")
}

/// What an `environment` query parameter asks for, relative to the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentRequest {
    /// No parameter present.
    Absent,
    /// The requested environment is already active.
    Current(String),
    /// The requested label is not in the catalog; ignored.
    Unknown(String),
    /// A known, different environment should become active.
    Switch(Environment),
}

impl EnvironmentRequest {
    /// Classify `query` against the catalog and the active environment label.
    #[must_use]
    pub fn classify(query: &str, catalog: &EnvironmentCatalog, active: &str) -> Self {
        let Some(requested) = environment_param(query) else {
            return Self::Absent;
        };
        if requested == active {
            return Self::Current(requested);
        }
        catalog
            .find(&requested)
            .map_or(Self::Unknown(requested), |env| Self::Switch(env.clone()))
    }

    /// The label named in the query string, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Current(name) | Self::Unknown(name) => Some(name),
            Self::Switch(env) => Some(&env.label),
        }
    }
}

/// Read the persisted active environment, falling back to the default one.
pub fn load_active<S: KeyValueStore + ?Sized>(store: &S) -> Environment {
    store
        .get(ENVIRONMENT_KEY)
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(env) => Some(env),
            Err(err) => {
                log::warn!("Discarding unreadable persisted environment: {err}");
                None
            }
        })
        .unwrap_or_else(Environment::default_environment)
}

/// Persist `env` as the active environment.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn store_active<S: KeyValueStore + ?Sized>(
    store: &S,
    env: &Environment,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(env).map_err(|err| StorageError::Write {
        key: ENVIRONMENT_KEY.to_string(),
        reason: err.to_string(),
    })?;
    store.set(ENVIRONMENT_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn catalog() -> EnvironmentCatalog {
        EnvironmentCatalog::from_entries(vec![
            Environment::named("prod"),
            Environment::named("dev"),
        ])
    }

    #[test]
    fn param_accepts_prefixed_and_stripped_forms() {
        assert_eq!(environment_param("?environment=dev").as_deref(), Some("dev"));
        assert_eq!(environment_param("environment=dev").as_deref(), Some("dev"));
        assert_eq!(
            environment_param("?foo=1&environment=Staging%20EU").as_deref(),
            Some("Staging EU")
        );
        assert_eq!(environment_param("?environment="), None);
        assert_eq!(environment_param(""), None);
        assert_eq!(environment_param("?env=dev"), None);
    }

    #[test]
    fn switch_query_is_encoded_and_parses_back() {
        let query = environment_query("us east&1");
        assert_eq!(query, "?environment=us+east%261");
        assert_eq!(environment_param(&query).as_deref(), Some("us east&1"));
    }

    #[test]
    fn classify_covers_each_outcome() {
        let catalog = catalog();
        assert_eq!(
            EnvironmentRequest::classify("", &catalog, "prod"),
            EnvironmentRequest::Absent
        );
        assert_eq!(
            EnvironmentRequest::classify("?environment=prod", &catalog, "prod"),
            EnvironmentRequest::Current("prod".into())
        );
        assert_eq!(
            EnvironmentRequest::classify("?environment=qa", &catalog, "prod"),
            EnvironmentRequest::Unknown("qa".into())
        );
        assert_eq!(
            EnvironmentRequest::classify("?environment=dev", &catalog, "prod"),
            EnvironmentRequest::Switch(Environment::named("dev"))
        );
    }

    #[test]
    fn catalog_keeps_first_duplicate() {
        let mut first = Environment::named("prod");
        first
            .connection
            .insert("host".into(), Value::String("a".into()));
        let catalog =
            EnvironmentCatalog::from_entries(vec![first.clone(), Environment::named("prod")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("prod"), Some(&first));
        assert_eq!(catalog.labels().collect::<Vec<_>>(), vec!["prod"]);
    }

    #[test]
    fn active_environment_round_trips_through_storage() {
        let store = MemoryStore::new();
        assert_eq!(load_active(&store).label, DEFAULT_ENVIRONMENT);
        store_active(&store, &Environment::named("dev")).unwrap();
        assert_eq!(load_active(&store).label, "dev");
    }

    #[test]
    fn unreadable_active_environment_falls_back_to_default() {
        let store = MemoryStore::with_entries([(ENVIRONMENT_KEY, "{not json")]);
        assert_eq!(load_active(&store), Environment::default_environment());
    }
}
