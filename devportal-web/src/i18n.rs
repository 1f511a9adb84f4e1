//! Translation context.
//!
//! The loaded [`MessageMap`] is handed down through a Yew context instead of a
//! global so both route trees see the same bundle. Until the bundle arrives the
//! map is empty and lookups echo their keys.

use devportal_core::MessageMap;
use devportal_core::locale::DEFAULT_LOCALE;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Translations(Rc<MessageMap>);

impl Default for Translations {
    fn default() -> Self {
        Self(Rc::new(MessageMap::empty(DEFAULT_LOCALE)))
    }
}

impl Translations {
    #[must_use]
    pub const fn new(messages: Rc<MessageMap>) -> Self {
        Self(messages)
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        self.0.lang()
    }

    /// Translate a key, echoing it when the bundle has no message for it.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.0.t(key)
    }

    /// Translate a key with `{name}` substitution.
    #[must_use]
    pub fn tr(&self, key: &str, args: &BTreeMap<&str, &str>) -> String {
        self.0.tr(key, args)
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub messages: Rc<MessageMap>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let translations = Translations::new(props.messages.clone());
    use_document_lang(translations.lang().to_string());

    html! {
        <ContextProvider<Translations> context={translations}>
            { props.children.clone() }
        </ContextProvider<Translations>>
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_document_lang(lang: String) {
    use_effect_with(lang, |lang| crate::dom::set_document_lang(lang));
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_document_lang(_lang: String) {}

/// Translations provided by the nearest [`I18nProvider`], or an empty bundle.
#[hook]
pub fn use_translations() -> Translations {
    use_context::<Translations>().unwrap_or_default()
}
