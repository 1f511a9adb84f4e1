use crate::pages::anonymous::AnonymousView;
use crate::pages::apis::ApisPage;
use crate::pages::application_create::ApplicationCreatePage;
use crate::pages::application_edit::ApplicationEditPage;
use crate::pages::applications::ApplicationsPage;
use crate::pages::not_found::NotFound;
use crate::router::AppRoute;
use devportal_core::routes::APPLICATION_ID_PARAM;
use devportal_core::{Page, Resolved};
use yew::prelude::*;
use yew_router::prelude::Redirect;

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    /// The location resolved against the table of the current session.
    pub resolved: Resolved,
}

#[function_component(RouteView)]
pub fn route_view(props: &RouteViewProps) -> Html {
    render_resolved(&props.resolved)
}

fn render_resolved(resolved: &Resolved) -> Html {
    match resolved {
        Resolved::Redirect(to) => {
            html! { <Redirect<AppRoute> to={AppRoute::for_redirect(to)} /> }
        }
        Resolved::Page { page, .. } => match page {
            Page::ApiListing => html! { <ApisPage /> },
            Page::ApplicationListing => html! { <ApplicationsPage /> },
            Page::ApplicationCreate => html! { <ApplicationCreatePage /> },
            Page::ApplicationEdit => {
                let id = resolved.param(APPLICATION_ID_PARAM).unwrap_or_default();
                html! { <ApplicationEditPage application_id={AttrValue::from(id.to_string())} /> }
            }
            Page::NotFound => html! { <NotFound /> },
            Page::AnonymousLanding => html! { <AnonymousView /> },
        },
    }
}
