//! Deployment base path for the router and fetched resources.
//!
//! When `CONTEXT_PATH` is set at compile time (e.g. `/store`), the console is
//! mounted under it. Builds without it use `/devportal`; an explicitly empty
//! value mounts the console at the origin root.

use devportal_core::ConsoleSettings;
use devportal_core::config::DEFAULT_CONTEXT_PATH;

#[must_use]
pub fn settings() -> ConsoleSettings {
    settings_with_base(option_env!("CONTEXT_PATH"))
}

/// Base path for the router, `None` when mounted at the origin root.
#[must_use]
pub fn router_base() -> Option<String> {
    settings().router_base()
}

fn settings_with_base(base: Option<&str>) -> ConsoleSettings {
    ConsoleSettings::new(base.unwrap_or(DEFAULT_CONTEXT_PATH))
}
