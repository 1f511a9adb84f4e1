//! Deployment settings and the environment configuration document.

use crate::environment::Environment;
use crate::fetch::{FetchError, ResourceFetcher};
use serde::Deserialize;
use thiserror::Error;

/// Context path used when the build does not override it.
pub const DEFAULT_CONTEXT_PATH: &str = "/devportal";

const LOCALES_DIR: &str = "public/app/locales";
const ENVIRONMENTS_RESOURCE: &str = "services/configs/environments.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to fetch environment configuration: {0}")]
    Fetch(#[from] FetchError),
    #[error("Malformed environment configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the console is mounted and where it finds its resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    context_path: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_PATH)
    }
}

impl ConsoleSettings {
    /// Settings rooted at `context_path` (e.g. `/devportal`). Trailing slashes
    /// are dropped; an empty path mounts the console at the origin root.
    #[must_use]
    pub fn new(context_path: &str) -> Self {
        Self {
            context_path: context_path.trim().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Router basename, or `None` when mounted at the origin root.
    #[must_use]
    pub fn router_base(&self) -> Option<String> {
        (!self.context_path.is_empty()).then(|| self.context_path.clone())
    }

    /// Absolute path of a resource under the context path.
    #[must_use]
    pub fn resource_path(&self, relative: &str) -> String {
        let rel = relative.trim_start_matches('/');
        format!("{}/{rel}", self.context_path)
    }

    #[must_use]
    pub fn locale_url(&self, tag: &str) -> String {
        self.resource_path(&format!("{LOCALES_DIR}/{tag}.json"))
    }

    #[must_use]
    pub fn environments_url(&self) -> String {
        self.resource_path(ENVIRONMENTS_RESOURCE)
    }

    /// Strip the context path from a browser pathname, yielding a router path.
    #[must_use]
    pub fn strip_context<'a>(&self, pathname: &'a str) -> &'a str {
        if self.context_path.is_empty() {
            return pathname;
        }
        match pathname.strip_prefix(self.context_path.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => pathname,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnvironmentsDocument {
    #[serde(default)]
    environments: Vec<Environment>,
}

/// Parse the `{ "environments": [...] }` configuration document.
///
/// # Errors
///
/// Returns an error if `text` is not a valid configuration document.
pub fn parse_environments(text: &str) -> Result<Vec<Environment>, ConfigError> {
    let document: EnvironmentsDocument = serde_json::from_str(text)?;
    Ok(document.environments)
}

/// Source of the environment catalog.
#[allow(async_fn_in_trait)]
pub trait ConfigProvider {
    /// Resolve the list of environments the console may switch between.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be fetched or parsed.
    async fn environments(&self) -> Result<Vec<Environment>, ConfigError>;
}

/// [`ConfigProvider`] that reads the configuration document over a
/// [`ResourceFetcher`].
pub struct FetchConfigProvider<F> {
    fetcher: F,
    url: String,
}

impl<F: ResourceFetcher> FetchConfigProvider<F> {
    pub fn new(fetcher: F, settings: &ConsoleSettings) -> Self {
        Self {
            fetcher,
            url: settings.environments_url(),
        }
    }
}

impl<F: ResourceFetcher> ConfigProvider for FetchConfigProvider<F> {
    async fn environments(&self) -> Result<Vec<Environment>, ConfigError> {
        let text = self.fetcher.fetch_text(&self.url).await?;
        parse_environments(&text)
    }
}
