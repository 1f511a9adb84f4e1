//! Locale selection and message bundles.

use crate::config::ConsoleSettings;
use crate::fetch::{Cancelled, FetchError, ResourceFetcher};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales with a bundle under `public/app/locales`.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es", "fr"];

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to fetch locale bundle {lang}: {source}")]
    Fetch {
        lang: String,
        #[source]
        source: FetchError,
    },
    #[error("Malformed locale bundle {lang}: {source}")]
    Malformed {
        lang: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Locale bundle {lang} has a non-string message for {key}")]
    NonString { lang: String, key: String },
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Drop the region from a language tag: `en-US` and `pt_BR` become `en` and `pt`.
#[must_use]
pub fn language_without_region(language: &str) -> Option<String> {
    language
        .trim()
        .split(['_', '-'])
        .next()
        .filter(|primary| !primary.is_empty())
        .map(str::to_lowercase)
}

/// Pick the bundle to load for a browser language, falling back to
/// [`DEFAULT_LOCALE`] when the language is absent or unsupported.
#[must_use]
pub fn resolve_locale(language: Option<&str>) -> &'static str {
    language
        .and_then(language_without_region)
        .and_then(|primary| {
            SUPPORTED_LOCALES
                .iter()
                .copied()
                .find(|code| *code == primary)
        })
        .unwrap_or(DEFAULT_LOCALE)
}

/// Flat `key -> template` translations for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMap {
    lang: String,
    messages: BTreeMap<String, String>,
}

impl MessageMap {
    /// Map with no translations; lookups echo the key.
    #[must_use]
    pub fn empty(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            messages: BTreeMap::new(),
        }
    }

    /// Parse a locale bundle. Every value must be a string.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object of strings.
    pub fn parse(lang: &str, text: &str) -> Result<Self, LocaleError> {
        let raw: Map<String, Value> =
            serde_json::from_str(text).map_err(|source| LocaleError::Malformed {
                lang: lang.to_string(),
                source,
            })?;
        let messages = raw
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(template) => Ok((key, template)),
                _ => Err(LocaleError::NonString {
                    lang: lang.to_string(),
                    key,
                }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            lang: lang.to_string(),
            messages,
        })
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Translate `key`, or return the key itself when no message exists.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, &BTreeMap::new())
    }

    /// Translate `key`, replacing `{name}` and `{{name}}` placeholders.
    #[must_use]
    pub fn tr(&self, key: &str, args: &BTreeMap<&str, &str>) -> String {
        let Some(template) = self.get(key) else {
            return key.to_string();
        };
        args.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
                .replace(&format!("{{{name}}}"), value)
        })
    }
}

/// Fetches locale bundles over a [`ResourceFetcher`].
pub struct LocaleLoader<F> {
    fetcher: F,
    settings: ConsoleSettings,
}

impl<F: ResourceFetcher> LocaleLoader<F> {
    pub const fn new(fetcher: F, settings: ConsoleSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Bundle URL for the locale that `language` resolves to.
    #[must_use]
    pub fn url_for(&self, language: Option<&str>) -> String {
        self.settings.locale_url(resolve_locale(language))
    }

    /// Fetch and parse the bundle for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be fetched or parsed.
    #[allow(clippy::future_not_send)]
    pub async fn load(&self, language: Option<&str>) -> Result<MessageMap, LocaleError> {
        let lang = resolve_locale(language);
        let url = self.url_for(Some(lang));
        log::debug!("Fetching locale bundle {url}");
        let text = self
            .fetcher
            .fetch_text(&url)
            .await
            .map_err(|source| LocaleError::Fetch {
                lang: lang.to_string(),
                source,
            })?;
        MessageMap::parse(lang, &text)
    }
}

/// Turn a finished load into the map to install. Failures are logged and
/// yield `None`, leaving whatever map is already shown in place.
pub fn settle_messages(outcome: Result<MessageMap, LocaleError>) -> Option<MessageMap> {
    match outcome {
        Ok(messages) => {
            log::debug!(
                "Loaded {} message(s) for locale {}",
                messages.len(),
                messages.lang()
            );
            Some(messages)
        }
        Err(LocaleError::Cancelled(_)) => {
            log::debug!("Superseded locale load discarded");
            None
        }
        Err(err) => {
            log::error!("{err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_are_stripped() {
        assert_eq!(language_without_region("en-US").as_deref(), Some("en"));
        assert_eq!(language_without_region("PT_br").as_deref(), Some("pt"));
        assert_eq!(language_without_region("fr").as_deref(), Some("fr"));
        assert_eq!(language_without_region("-x"), None);
        assert_eq!(language_without_region(""), None);
    }

    #[test]
    fn unsupported_or_missing_languages_fall_back() {
        assert_eq!(resolve_locale(Some("es-MX")), "es");
        assert_eq!(resolve_locale(Some("xx-YY")), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(Some("de-DE")), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(None), DEFAULT_LOCALE);
    }

    #[test]
    fn translation_falls_back_to_key_and_interpolates() {
        let map = MessageMap::parse(
            "en",
            r#"{"greeting":"Hello, {name}! {{name}}!","title":"APIs"}"#,
        )
        .unwrap();
        assert_eq!(map.lang(), "en");
        assert_eq!(map.t("title"), "APIs");
        assert_eq!(map.t("missing.key"), "missing.key");
        let args = BTreeMap::from([("name", "Tester")]);
        assert_eq!(map.tr("greeting", &args), "Hello, Tester! Tester!");
    }

    #[test]
    fn non_flat_bundles_are_rejected() {
        assert!(matches!(
            MessageMap::parse("en", r#"{"nested":{"a":"b"}}"#),
            Err(LocaleError::NonString { key, .. }) if key == "nested"
        ));
        assert!(matches!(
            MessageMap::parse("en", "[1,2]"),
            Err(LocaleError::Malformed { .. })
        ));
    }

    #[test]
    fn settle_keeps_previous_on_failure() {
        assert!(settle_messages(Err(LocaleError::Cancelled(Cancelled))).is_none());
        assert!(
            settle_messages(Err(LocaleError::NonString {
                lang: "en".into(),
                key: "k".into()
            }))
            .is_none()
        );
        let map = MessageMap::empty("fr");
        assert_eq!(settle_messages(Ok(map.clone())), Some(map));
    }
}
