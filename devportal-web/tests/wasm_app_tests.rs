#![cfg(target_arch = "wasm32")]

use devportal_core::storage::THEME_INDEX_KEY;
use devportal_core::{KeyValueStore, ResourceFetcher};
use devportal_web::platform::{BrowserFetcher, BrowserStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_storage_round_trips() {
    let store = BrowserStorage;
    store.set(THEME_INDEX_KEY, "1").expect("localStorage writable");
    assert_eq!(store.get(THEME_INDEX_KEY).as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn browser_language_is_reported() {
    assert!(devportal_web::dom::browser_language().is_some());
}

#[wasm_bindgen_test]
async fn missing_resource_reports_status() {
    let err = BrowserFetcher
        .fetch_text("/definitely-missing.json")
        .await
        .expect_err("404 expected");
    assert!(matches!(err, devportal_core::FetchError::Status { .. }));
}
