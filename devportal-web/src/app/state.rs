use crate::platform::PlatformStore;
use devportal_core::{ConsoleContext, EnvironmentCatalog, LoadHandle, MessageMap};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type SharedConsole = Rc<RefCell<ConsoleContext<PlatformStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub console: SharedConsole,
    pub messages: UseStateHandle<Rc<MessageMap>>,
    pub theme_index: UseStateHandle<usize>,
    /// Bumped when the environment catalog is replaced so the gate re-runs.
    pub catalog_revision: UseStateHandle<u32>,
    pub locale_load: Rc<RefCell<Option<LoadHandle>>>,
}

/// Mount the console over `store` once and expose the render-driving state.
/// A `catalog` known up front is installed at mount.
#[hook]
pub fn use_app_state(
    store: PlatformStore,
    language: Option<AttrValue>,
    catalog: Option<EnvironmentCatalog>,
) -> AppState {
    let console = use_mut_ref(move || {
        let mut console = ConsoleContext::mount(store, language.as_deref());
        if let Some(catalog) = catalog {
            console.set_catalog(catalog);
        }
        console
    });
    let theme_index = {
        let console = console.clone();
        use_state(move || console.borrow().theme_index())
    };
    let messages = {
        let console = console.clone();
        use_state(move || Rc::new(MessageMap::empty(console.borrow().locale())))
    };

    AppState {
        console,
        messages,
        theme_index,
        catalog_revision: use_state(|| 0_u32),
        locale_load: use_mut_ref(|| None::<LoadHandle>),
    }
}

impl AppState {
    /// Advance the theme and persist it.
    pub fn cycle_theme(&self) {
        let next = self.console.borrow_mut().cycle_theme();
        self.theme_index.set(next);
    }
}
