use crate::components::base::Base;
use crate::i18n::I18nProvider;
use crate::paths;
use crate::platform::PlatformStore;
use crate::router::AppRoute;
use crate::theme::ThemeProvider;
use devportal_core::EnvironmentCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;

use routing::RouteView;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = paths::router_base().map(AttrValue::from);
    let language = crate::dom::browser_language().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Console store={crate::platform::BrowserStorage} {language} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsoleProps {
    pub store: PlatformStore,
    /// Preferred browser language, if known.
    #[prop_or_default]
    pub language: Option<AttrValue>,
    /// Environment catalog known before mount. When set, the catalog is not
    /// fetched from the configuration endpoint.
    #[prop_or_default]
    pub catalog: Option<EnvironmentCatalog>,
}

/// The console shell. Must sit inside a router; every render gates the
/// current location against the cached session of the active environment.
#[function_component(Console)]
pub fn console(props: &ConsoleProps) -> Html {
    let app_state = state::use_app_state(
        props.store.clone(),
        props.language.clone(),
        props.catalog.clone(),
    );
    bootstrap::use_bootstrap(&app_state, props.catalog.is_none());
    let location = use_location();

    let settings = paths::settings();
    let (path, query) = location.as_ref().map_or_else(
        || ("/".to_string(), String::new()),
        |loc| {
            (
                settings.strip_context(loc.path()).to_string(),
                loc.query_str().to_string(),
            )
        },
    );

    let decision = app_state.console.borrow_mut().gate(&query);
    let environments: Vec<AttrValue> = app_state
        .console
        .borrow()
        .catalog()
        .labels()
        .map(|label| AttrValue::from(label.to_string()))
        .collect();
    let table = decision.routes();
    let resolved = table.resolve(&path);
    log::debug!(
        "Gate: environment={}, requested={:?}, {:?} tree: {path} -> {resolved:?}",
        decision.environment,
        decision.requested,
        table.tree()
    );
    let active = AppRoute::from_resolved(&resolved);

    let on_cycle = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.cycle_theme())
    };

    html! {
        <I18nProvider messages={(*app_state.messages).clone()}>
            <ThemeProvider index={*app_state.theme_index} {on_cycle}>
                <Base
                    session={decision.session.clone()}
                    environment={AttrValue::from(decision.environment.clone())}
                    {environments}
                    {active}
                >
                    <RouteView {resolved} />
                </Base>
            </ThemeProvider>
        </I18nProvider>
    }
}
