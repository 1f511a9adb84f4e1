//! Developer portal console core
//!
//! Platform-agnostic gating logic for the developer portal front-end: which
//! environment is active, whether a session is cached for it, which route
//! table applies, and which locale and theme to present. Browser bindings live
//! in `devportal-web` and plug in through [`KeyValueStore`],
//! [`ResourceFetcher`] and [`ConfigProvider`].

pub mod config;
pub mod context;
pub mod environment;
pub mod fetch;
pub mod locale;
pub mod routes;
pub mod session;
pub mod storage;
pub mod theme;

pub use config::{ConfigError, ConfigProvider, ConsoleSettings, FetchConfigProvider};
pub use context::{ConsoleContext, GateDecision};
pub use environment::{
    Environment, EnvironmentCatalog, EnvironmentRequest, environment_param,
    environment_query,
};
pub use fetch::{Cancelled, FetchError, LoadHandle, ResourceFetcher, cancellable};
pub use locale::{LocaleError, LocaleLoader, MessageMap, resolve_locale, settle_messages};
pub use routes::{Page, Resolved, RouteTable, RouteTree};
pub use session::{SessionInfo, SessionState, has_session, session_for};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::{PALETTE, THEME_SELECTION_MODULUS, Theme};
