use crate::i18n::use_translations;
use crate::router::AppRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Shown for any authenticated path without a declared route.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let i18n = use_translations();
    html! {
        <section class="page not-found" aria-live="assertive">
            <h1>{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <Link<AppRoute> to={AppRoute::landing()}>{ i18n.t("not_found.back") }</Link<AppRoute>>
        </section>
    }
}
