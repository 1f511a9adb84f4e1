//! Browser implementations of the console's storage and fetch seams.

use crate::dom;
use devportal_core::{FetchError, KeyValueStore, ResourceFetcher, StorageError};

/// `localStorage`-backed store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage()
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }
}

/// `window.fetch`-backed resource fetcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

impl ResourceFetcher for BrowserFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = dom::fetch_response(url)
            .await
            .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        dom::response_text(&response)
            .await
            .map_err(|err| FetchError::Body(dom::js_error_message(&err)))
    }
}

/// Storage the console mounts over: `localStorage` in the browser, an
/// in-memory map when rendered on the host.
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = devportal_core::MemoryStore;
