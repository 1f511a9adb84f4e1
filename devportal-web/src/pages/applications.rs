use crate::i18n::use_translations;
use crate::router::AppRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(ApplicationsPage)]
pub fn applications_page() -> Html {
    let i18n = use_translations();
    html! {
        <section class="page applications" aria-labelledby="applications-title">
            <h1 id="applications-title">{ i18n.t("applications.title") }</h1>
            <Link<AppRoute> to={AppRoute::ApplicationCreate} classes="button">
                { i18n.t("applications.add") }
            </Link<AppRoute>>
        </section>
    }
}
