//! Route tables for the authenticated and anonymous console.
//!
//! Each session state maps to one static table. Paths are matched in
//! declaration order; a pattern matches when its segments are a prefix of the
//! path's segments unless the entry is exact. `:name` segments capture.

use crate::session::SessionState;
use std::collections::BTreeMap;

/// Where an authenticated visitor lands from `/`.
pub const LANDING_PATH: &str = "/apis";

/// Path parameter carrying the application identifier on the edit page.
pub const APPLICATION_ID_PARAM: &str = "application_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ApiListing,
    ApplicationListing,
    ApplicationCreate,
    ApplicationEdit,
    NotFound,
    AnonymousLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(&'static str),
    Page(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `None` matches every path.
    pub pattern: Option<&'static str>,
    pub exact: bool,
    pub target: RouteTarget,
}

impl RouteEntry {
    const fn exact(pattern: &'static str, target: RouteTarget) -> Self {
        Self {
            pattern: Some(pattern),
            exact: true,
            target,
        }
    }

    const fn prefix(pattern: &'static str, page: Page) -> Self {
        Self {
            pattern: Some(pattern),
            exact: false,
            target: RouteTarget::Page(page),
        }
    }

    const fn fallback(page: Page) -> Self {
        Self {
            pattern: None,
            exact: false,
            target: RouteTarget::Page(page),
        }
    }

    fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let Some(pattern) = self.pattern else {
            return Some(BTreeMap::new());
        };
        let wanted: Vec<&str> = segments(pattern).collect();
        let actual: Vec<&str> = segments(path).collect();
        if actual.len() < wanted.len() || (self.exact && actual.len() != wanted.len()) {
            return None;
        }
        let mut params = BTreeMap::new();
        for (want, got) in wanted.iter().zip(&actual) {
            if let Some(name) = want.strip_prefix(':') {
                params.insert(name.to_string(), (*got).to_string());
            } else if !want.eq_ignore_ascii_case(got) {
                return None;
            }
        }
        Some(params)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

const AUTHENTICATED_ROUTES: &[RouteEntry] = &[
    RouteEntry::exact("/", RouteTarget::Redirect(LANDING_PATH)),
    RouteEntry::prefix("/apis", Page::ApiListing),
    RouteEntry::prefix("/applications", Page::ApplicationListing),
    RouteEntry::prefix("/application/create", Page::ApplicationCreate),
    RouteEntry::prefix("/application/edit/:application_id", Page::ApplicationEdit),
    RouteEntry::fallback(Page::NotFound),
];

const ANONYMOUS_ROUTES: &[RouteEntry] = &[RouteEntry::prefix("/", Page::AnonymousLanding)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTree {
    Authenticated,
    Anonymous,
}

/// Outcome of resolving a path against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Redirect(&'static str),
    Page {
        page: Page,
        params: BTreeMap<String, String>,
    },
}

impl Resolved {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            Self::Page { params, .. } => params.get(name).map(String::as_str),
            Self::Redirect(_) => None,
        }
    }
}

/// The route table in effect for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTable {
    tree: RouteTree,
    entries: &'static [RouteEntry],
}

impl RouteTable {
    /// Select the table for `session`.
    #[must_use]
    pub const fn compose(session: &SessionState) -> Self {
        match session {
            SessionState::Authenticated(_) => Self {
                tree: RouteTree::Authenticated,
                entries: AUTHENTICATED_ROUTES,
            },
            SessionState::Anonymous => Self {
                tree: RouteTree::Anonymous,
                entries: ANONYMOUS_ROUTES,
            },
        }
    }

    #[must_use]
    pub const fn tree(&self) -> RouteTree {
        self.tree
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// Resolve `path` to the first matching entry. Both tables end in a
    /// catch-all, so every path resolves.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolved {
        self.entries
            .iter()
            .find_map(|entry| entry.matches(path).map(|params| (entry.target, params)))
            .map_or(
                Resolved::Page {
                    page: Page::NotFound,
                    params: BTreeMap::new(),
                },
                |(target, params)| match target {
                    RouteTarget::Redirect(to) => Resolved::Redirect(to),
                    RouteTarget::Page(page) => Resolved::Page { page, params },
                },
            )
    }
}
