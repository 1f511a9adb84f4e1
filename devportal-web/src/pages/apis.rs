use crate::i18n::use_translations;
use yew::prelude::*;

#[function_component(ApisPage)]
pub fn apis_page() -> Html {
    let i18n = use_translations();
    html! {
        <section class="page apis" aria-labelledby="apis-title">
            <h1 id="apis-title">{ i18n.t("apis.title") }</h1>
            <p>{ i18n.t("apis.description") }</p>
        </section>
    }
}
