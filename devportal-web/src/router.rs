use devportal_core::routes::{APPLICATION_ID_PARAM, LANDING_PATH};
use devportal_core::{Page, Resolved};
use yew_router::prelude::*;

/// Link targets for the authenticated tree. Matching is done by the core
/// route table; this enum only builds hrefs and redirect targets.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum AppRoute {
    #[at("/")]
    Root,
    #[at("/apis")]
    Apis,
    #[at("/applications")]
    Applications,
    #[at("/application/create")]
    ApplicationCreate,
    #[at("/application/edit/:application_id")]
    ApplicationEdit { application_id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl AppRoute {
    /// Route for a redirect target path, falling back to the landing page.
    #[must_use]
    pub fn for_redirect(path: &str) -> Self {
        Self::recognize(path)
            .filter(|route| *route != Self::NotFound)
            .unwrap_or(Self::Apis)
    }

    /// Route that renders the page of a resolved path, if the page has one.
    #[must_use]
    pub fn from_resolved(resolved: &Resolved) -> Option<Self> {
        let Resolved::Page { page, .. } = resolved else {
            return None;
        };
        match page {
            Page::ApiListing => Some(Self::Apis),
            Page::ApplicationListing => Some(Self::Applications),
            Page::ApplicationCreate => Some(Self::ApplicationCreate),
            Page::ApplicationEdit => resolved.param(APPLICATION_ID_PARAM).map(|id| {
                Self::ApplicationEdit {
                    application_id: id.to_string(),
                }
            }),
            Page::NotFound => Some(Self::NotFound),
            Page::AnonymousLanding => None,
        }
    }

    #[must_use]
    pub fn landing() -> Self {
        Self::for_redirect(LANDING_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devportal_core::{RouteTable, SessionInfo, SessionState};

    fn authenticated() -> RouteTable {
        RouteTable::compose(&SessionState::Authenticated(SessionInfo::new("admin")))
    }

    #[test]
    fn link_targets_resolve_to_their_own_pages() {
        let table = authenticated();
        for route in [
            AppRoute::Apis,
            AppRoute::Applications,
            AppRoute::ApplicationCreate,
            AppRoute::ApplicationEdit {
                application_id: "a-17".into(),
            },
            AppRoute::NotFound,
        ] {
            let resolved = table.resolve(&route.to_path());
            assert_eq!(AppRoute::from_resolved(&resolved), Some(route));
        }
    }

    #[test]
    fn root_redirects_to_landing() {
        let resolved = authenticated().resolve(&AppRoute::Root.to_path());
        assert_eq!(resolved, Resolved::Redirect(LANDING_PATH));
        assert_eq!(AppRoute::landing(), AppRoute::Apis);
    }

    #[test]
    fn unknown_redirect_targets_fall_back_to_landing() {
        assert_eq!(AppRoute::for_redirect("/nowhere"), AppRoute::Apis);
        assert_eq!(
            AppRoute::for_redirect("/applications"),
            AppRoute::Applications
        );
    }
}
