//! Remote loads kicked off at mount: the environment catalog and the locale
//! bundle. Both degrade to logged errors and leave the shell usable.

use crate::app::state::SharedConsole;
use devportal_core::{
    ConfigProvider, ConsoleSettings, EnvironmentCatalog, LoadHandle, LocaleError, LocaleLoader,
    MessageMap, ResourceFetcher, cancellable, settle_messages,
};
use std::cell::RefCell;
use yew::prelude::*;

/// Replace the console's catalog with the provider's environments and return
/// how many were loaded.
#[allow(clippy::future_not_send)]
pub async fn refresh_catalog<P: ConfigProvider>(console: &SharedConsole, provider: &P) -> usize {
    let catalog = EnvironmentCatalog::load(provider).await;
    let loaded = catalog.len();
    console.borrow_mut().set_catalog(catalog);
    loaded
}

/// Start loading the bundle for `language`, cancelling any load still in
/// flight in `slot`. The returned future yields the map to install, or `None`
/// when the load failed or was superseded.
pub fn begin_locale_load<F>(
    slot: &RefCell<Option<LoadHandle>>,
    fetcher: F,
    settings: ConsoleSettings,
    language: Option<String>,
) -> impl Future<Output = Option<MessageMap>> + use<F>
where
    F: ResourceFetcher + 'static,
{
    if let Some(previous) = slot.borrow_mut().take() {
        previous.cancel();
    }
    let loader = LocaleLoader::new(fetcher, settings);
    let (task, handle) = cancellable(async move { loader.load(language.as_deref()).await });
    *slot.borrow_mut() = Some(handle);
    async move {
        let outcome = task
            .await
            .map_err(LocaleError::from)
            .and_then(std::convert::identity);
        settle_messages(outcome)
    }
}

/// Spawn the mount-time loads. The catalog fetch is skipped when
/// `fetch_catalog` is false because the catalog was supplied up front.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &crate::app::state::AppState, fetch_catalog: bool) {
    use crate::paths;
    use crate::platform::BrowserFetcher;
    use devportal_core::FetchConfigProvider;
    use std::rc::Rc;

    let app_state = app_state.clone();
    use_effect_with((), move |()| {
        let settings = paths::settings();

        if fetch_catalog {
            let console = app_state.console.clone();
            let revision = app_state.catalog_revision.clone();
            let provider = FetchConfigProvider::new(BrowserFetcher, &settings);
            wasm_bindgen_futures::spawn_local(async move {
                refresh_catalog(&console, &provider).await;
                revision.set(*revision + 1);
            });
        }

        let language = Some(app_state.console.borrow().locale().to_string());
        let pending = begin_locale_load(&app_state.locale_load, BrowserFetcher, settings, language);
        let messages = app_state.messages.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(map) = pending.await {
                messages.set(Rc::new(map));
            }
        });
        || {}
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(_app_state: &crate::app::state::AppState, _fetch_catalog: bool) {}

#[cfg(test)]
mod tests {
    use super::*;
    use devportal_core::{ConsoleContext, FetchError, MemoryStore};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::rc::Rc;

    struct Canned(&'static str);

    impl ResourceFetcher for Canned {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    struct Pending(RefCell<Option<oneshot::Receiver<String>>>);

    impl ResourceFetcher for Pending {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            let receiver = self.0.borrow_mut().take();
            match receiver {
                Some(receiver) => receiver
                    .await
                    .map_err(|_| FetchError::Request("dropped".into())),
                None => Err(FetchError::Request("no response queued".into())),
            }
        }
    }

    struct Catalog(Vec<&'static str>);

    impl ConfigProvider for Catalog {
        async fn environments(
            &self,
        ) -> Result<Vec<devportal_core::Environment>, devportal_core::ConfigError> {
            Ok(self
                .0
                .iter()
                .map(|label| devportal_core::Environment::named(*label))
                .collect())
        }
    }

    #[test]
    fn refresh_installs_catalog() {
        let console: SharedConsole =
            Rc::new(RefCell::new(ConsoleContext::mount(MemoryStore::new(), None)));
        let loaded = block_on(refresh_catalog(&console, &Catalog(vec!["prod", "dev"])));
        assert_eq!(loaded, 2);
        assert!(console.borrow().catalog().find("dev").is_some());
    }

    #[test]
    fn locale_load_yields_parsed_bundle() {
        let slot = RefCell::new(None);
        let pending = begin_locale_load(
            &slot,
            Canned(r#"{"apis.title":"APIs"}"#),
            ConsoleSettings::new("/devportal"),
            Some("en-US".into()),
        );
        let map = block_on(pending).expect("bundle installed");
        assert_eq!(map.lang(), "en");
        assert_eq!(map.t("apis.title"), "APIs");
        assert!(slot.borrow().is_some());
    }

    #[test]
    fn newer_locale_load_cancels_older() {
        let slot = RefCell::new(None);
        let (_sender, receiver) = oneshot::channel();
        let stale = begin_locale_load(
            &slot,
            Pending(RefCell::new(Some(receiver))),
            ConsoleSettings::new("/devportal"),
            Some("fr".into()),
        );
        let fresh = begin_locale_load(
            &slot,
            Canned(r#"{"apis.title":"API"}"#),
            ConsoleSettings::new("/devportal"),
            Some("es-MX".into()),
        );
        assert!(block_on(stale).is_none());
        let installed = block_on(fresh).map(|map| map.lang().to_string());
        assert_eq!(installed.as_deref(), Some("es"));
    }

    #[test]
    fn malformed_bundle_installs_nothing() {
        let slot = RefCell::new(None);
        let pending = begin_locale_load(
            &slot,
            Canned("not json"),
            ConsoleSettings::new(""),
            None,
        );
        assert!(block_on(pending).is_none());
    }
}
