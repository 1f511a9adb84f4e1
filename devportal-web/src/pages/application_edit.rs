use crate::i18n::use_translations;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApplicationEditProps {
    pub application_id: AttrValue,
}

#[function_component(ApplicationEditPage)]
pub fn application_edit_page(props: &ApplicationEditProps) -> Html {
    let i18n = use_translations();
    let args = BTreeMap::from([("id", props.application_id.as_str())]);
    html! {
        <section class="page application-edit" aria-labelledby="application-edit-title">
            <h1 id="application-edit-title">{ i18n.tr("applications.edit.title", &args) }</h1>
        </section>
    }
}
