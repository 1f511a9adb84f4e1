//! Explicit per-page-view console state.
//!
//! [`ConsoleContext`] owns the storage handle together with everything the gate
//! reads on each render: the environment catalog, the active environment, the
//! theme index and the chosen locale.

use crate::environment::{
    Environment, EnvironmentCatalog, EnvironmentRequest, load_active, store_active,
};
use crate::locale::resolve_locale;
use crate::routes::RouteTable;
use crate::session::{SessionState, session_for};
use crate::storage::KeyValueStore;
use crate::theme::{Theme, cycle_theme_index, restore_theme_index, theme_for_index};

/// Result of gating one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Environment named by the query string, if any.
    pub requested: Option<String>,
    /// Active environment after the query string was applied.
    pub environment: String,
    pub session: SessionState,
}

impl GateDecision {
    #[must_use]
    pub const fn routes(&self) -> RouteTable {
        RouteTable::compose(&self.session)
    }
}

pub struct ConsoleContext<S> {
    store: S,
    catalog: EnvironmentCatalog,
    active: Environment,
    theme_index: usize,
    locale: &'static str,
}

impl<S: KeyValueStore> ConsoleContext<S> {
    /// Restore persisted state at mount. The catalog starts empty until
    /// [`Self::set_catalog`] is called with the fetched configuration.
    pub fn mount(store: S, browser_language: Option<&str>) -> Self {
        let active = load_active(&store);
        let theme_index = restore_theme_index(&store);
        let locale = resolve_locale(browser_language);
        log::debug!(
            "Console mounted: environment={}, theme_index={theme_index}, locale={locale}",
            active.label
        );
        Self {
            store,
            catalog: EnvironmentCatalog::default(),
            active,
            theme_index,
            locale,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn catalog(&self) -> &EnvironmentCatalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: EnvironmentCatalog) {
        self.catalog = catalog;
    }

    pub const fn active_environment(&self) -> &Environment {
        &self.active
    }

    pub const fn locale(&self) -> &'static str {
        self.locale
    }

    /// Apply the `environment` query parameter and return the name it carried.
    ///
    /// Absent, already-active and unknown names leave state untouched. A known,
    /// different environment becomes active and is persisted. Calling this again
    /// with the same query is a no-op.
    pub fn resolve_environment_param(&mut self, query: &str) -> Option<String> {
        let request = EnvironmentRequest::classify(query, &self.catalog, &self.active.label);
        if let EnvironmentRequest::Switch(env) = &request {
            log::debug!("Switching environment {} -> {}", self.active.label, env.label);
            if let Err(err) = store_active(&self.store, env) {
                log::warn!("Could not persist environment {}: {err}", env.label);
            }
            self.active = env.clone();
        }
        request.requested().map(str::to_string)
    }

    /// Passive session lookup for the active environment.
    pub fn session(&self) -> SessionState {
        session_for(&self.store, &self.active.label)
    }

    /// Resolve the query string, then check the session of the resulting
    /// active environment.
    pub fn gate(&mut self, query: &str) -> GateDecision {
        let requested = self.resolve_environment_param(query);
        GateDecision {
            requested,
            environment: self.active.label.clone(),
            session: self.session(),
        }
    }

    pub const fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub const fn theme(&self) -> &'static Theme {
        theme_for_index(self.theme_index)
    }

    /// Advance to the next theme and persist the new index.
    pub fn cycle_theme(&mut self) -> usize {
        self.theme_index = cycle_theme_index(&self.store, self.theme_index);
        self.theme_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::DEFAULT_ENVIRONMENT;
    use crate::routes::RouteTree;
    use crate::session::session_key;
    use crate::storage::{ENVIRONMENT_KEY, MemoryStore};

    fn mounted(store: &MemoryStore) -> ConsoleContext<MemoryStore> {
        let mut ctx = ConsoleContext::mount(store.clone(), Some("en-GB"));
        ctx.set_catalog(EnvironmentCatalog::from_entries(vec![
            Environment::named("prod"),
            Environment::named("dev"),
        ]));
        ctx
    }

    #[test]
    fn mount_uses_defaults_on_empty_storage() {
        let ctx = ConsoleContext::mount(MemoryStore::new(), None);
        assert_eq!(ctx.active_environment().label, DEFAULT_ENVIRONMENT);
        assert_eq!(ctx.theme_index(), 0);
        assert_eq!(ctx.theme().name, "light");
        assert_eq!(ctx.locale(), "en");
        assert!(ctx.catalog().is_empty());
    }

    #[test]
    fn switch_persists_and_survives_reload() {
        let store = MemoryStore::new();
        let mut ctx = mounted(&store);
        assert_eq!(ctx.resolve_environment_param("?environment=dev").as_deref(), Some("dev"));
        assert!(store.get(ENVIRONMENT_KEY).is_some());

        let reloaded = ConsoleContext::mount(store.clone(), None);
        assert_eq!(reloaded.active_environment().label, "dev");
    }

    #[test]
    fn gate_checks_session_of_switched_environment() {
        let store =
            MemoryStore::with_entries([(session_key("dev"), r#"{"name":"alice"}"#)]);
        let mut ctx = mounted(&store);

        let before = ctx.gate("");
        assert_eq!(before.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(before.routes().tree(), RouteTree::Anonymous);

        let after = ctx.gate("?environment=dev");
        assert_eq!(after.requested.as_deref(), Some("dev"));
        assert_eq!(after.environment, "dev");
        assert_eq!(after.routes().tree(), RouteTree::Authenticated);
    }

    #[test]
    fn theme_cycle_updates_rendered_theme() {
        let store = MemoryStore::new();
        let mut ctx = mounted(&store);
        assert_eq!(ctx.cycle_theme(), 1);
        assert_eq!(ctx.theme().name, "dark");
        assert_eq!(ctx.cycle_theme(), 2);
        assert_eq!(ctx.theme().name, "light");
        assert_eq!(ConsoleContext::mount(store.clone(), None).theme_index(), 2);
    }
}
