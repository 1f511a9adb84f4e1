use devportal_core::{MessageMap, SessionState};
use devportal_web::components::base::Base;
use devportal_web::i18n::I18nProvider;
use devportal_web::pages::{
    anonymous::AnonymousView, apis::ApisPage, application_edit::ApplicationEditPage,
    not_found::NotFound,
};
use devportal_web::theme::ThemeProvider;
use futures::executor::block_on;
use std::rc::Rc;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::Router;

const BUNDLE: &str = r#"{
    "apis.title": "APIs",
    "applications.edit.title": "Edit {id}",
    "not_found.title": "Page not found",
    "anonymous.title": "Welcome",
    "ui.switch_theme": "Switch theme"
}"#;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let messages = Rc::new(MessageMap::parse("en", BUNDLE).unwrap());
    html! {
        <Router history={AnyHistory::from(MemoryHistory::new())}>
            <I18nProvider {messages}>
                <ThemeProvider index={0}>
                    { props.children.clone() }
                </ThemeProvider>
            </I18nProvider>
        </Router>
    }
}

fn render(children: Html) -> String {
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { children }).render())
}

#[test]
fn pages_use_loaded_bundle() {
    assert!(render(html! { <ApisPage /> }).contains("APIs"));
    assert!(render(html! { <NotFound /> }).contains("Page not found"));
    assert!(render(html! { <AnonymousView /> }).contains("Welcome"));
}

#[test]
fn edit_page_interpolates_application_id() {
    let html = render(html! { <ApplicationEditPage application_id="a-17" /> });
    assert!(html.contains("Edit a-17"));
}

#[test]
fn missing_messages_echo_their_keys() {
    let html = render(html! { <ApisPage /> });
    assert!(html.contains("apis.description"));
}

#[test]
fn pages_render_without_a_provider() {
    let html = block_on(LocalServerRenderer::<ApisPage>::new().render());
    assert!(html.contains("apis.title"));
}

#[test]
fn base_lists_environment_switch_links() {
    let environments = vec![AttrValue::from("prod"), AttrValue::from("dev test")];
    let html = render(html! {
        <Base session={SessionState::Anonymous} environment="prod" {environments}>
            <p>{"body"}</p>
        </Base>
    });
    assert!(html.contains(r#"href="?environment=dev+test""#));
    assert!(html.contains(r#"aria-current="true""#));
    assert!(html.contains("Switch theme"));
    assert!(html.contains("body"));
}

#[test]
fn base_hides_switcher_for_single_environment() {
    let html = render(html! {
        <Base session={SessionState::Anonymous} environment="Default" />
    });
    assert!(!html.contains("environments"));
}
