use crate::i18n::use_translations;
use yew::prelude::*;

#[function_component(ApplicationCreatePage)]
pub fn application_create_page() -> Html {
    let i18n = use_translations();
    html! {
        <section class="page application-create" aria-labelledby="application-create-title">
            <h1 id="application-create-title">{ i18n.t("applications.create.title") }</h1>
        </section>
    }
}
