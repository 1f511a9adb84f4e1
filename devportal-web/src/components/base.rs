use crate::i18n::use_translations;
use crate::router::AppRoute;
use crate::theme::use_theme;
use devportal_core::{SessionState, environment_query};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: SessionState,
    pub environment: AttrValue,
    #[prop_or_default]
    pub environments: Vec<AttrValue>,
    /// Route of the page being shown, if it has one.
    #[prop_or_default]
    pub active: Option<AppRoute>,
    #[prop_or_default]
    pub children: Html,
}

/// Page chrome shared by both route trees.
#[function_component(Base)]
pub fn base(p: &Props) -> Html {
    let i18n = use_translations();
    let theme = use_theme();
    let cycle = {
        let cb = theme.on_cycle.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let nav_class = |route: AppRoute| {
        let current = p.active.as_ref() == Some(&route);
        classes!(current.then_some("active"))
    };

    let nav = p.session.user().map_or_else(Html::default, |user| {
        html! {
            <nav aria-label={i18n.t("nav.main")} class="header-left">
                <Link<AppRoute> to={AppRoute::Apis} classes={nav_class(AppRoute::Apis)}>
                    { i18n.t("nav.apis") }
                </Link<AppRoute>>
                <Link<AppRoute> to={AppRoute::Applications} classes={nav_class(AppRoute::Applications)}>
                    { i18n.t("nav.applications") }
                </Link<AppRoute>>
                <span class="user">{ user.name.clone() }</span>
            </nav>
        }
    });

    let switcher = if p.environments.len() > 1 {
        html! {
            <ul class="environments" aria-label={i18n.t("nav.environment")}>
                { for p.environments.iter().map(|label| {
                    let current = *label == p.environment;
                    html! {
                        <li>
                            <a href={environment_query(label)}
                               aria-current={current.then_some("true")}>
                                { label.clone() }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        }
    } else {
        Html::default()
    };

    html! {
        <>
            <header role="banner">
                <a href="#main" class="sr-only">{ i18n.t("ui.skip_to_content") }</a>
                <div class="header-content">
                    { nav }
                    <div class="header-right">
                        <span class="environment" data-environment={p.environment.clone()}>
                            { p.environment.clone() }
                        </span>
                        { switcher }
                        <button id="theme-cycle-btn" onclick={cycle}>{ i18n.t("ui.switch_theme") }</button>
                    </div>
                </div>
            </header>
            <main id="main" role="main">
                { p.children.clone() }
            </main>
        </>
    }
}
