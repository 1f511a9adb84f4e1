use crate::i18n::use_translations;
use yew::prelude::*;

/// Landing view for visitors without a cached session. Every path renders it.
#[function_component(AnonymousView)]
pub fn anonymous_view() -> Html {
    let i18n = use_translations();
    html! {
        <section class="page anonymous" aria-labelledby="anonymous-title">
            <h1 id="anonymous-title">{ i18n.t("anonymous.title") }</h1>
            <p>{ i18n.t("anonymous.message") }</p>
        </section>
    }
}
