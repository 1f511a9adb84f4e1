//! Theme palette and the persisted theme index.
//!
//! Cycling wraps the index modulo [`THEME_SELECTION_MODULUS`] while rendering
//! picks from [`PALETTE`] modulo its length. The two moduli differ, so one
//! step of every cycle re-applies the light theme.

use crate::storage::{KeyValueStore, THEME_INDEX_KEY};

/// Modulus applied when advancing the theme index.
pub const THEME_SELECTION_MODULUS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const LIGHT: Theme = Theme {
    name: "light",
    primary: "#1d3c6b",
    background: "#fafafa",
    text: "#212121",
};

pub const DARK: Theme = Theme {
    name: "dark",
    primary: "#90caf9",
    background: "#121212",
    text: "#eeeeee",
};

/// Themes available at render time, in cycle order.
pub const PALETTE: &[Theme] = &[LIGHT, DARK];

/// Theme rendered for `index`.
#[must_use]
pub const fn theme_for_index(index: usize) -> &'static Theme {
    &PALETTE[index % PALETTE.len()]
}

/// Index following `current` in the selection cycle.
#[must_use]
pub const fn next_theme_index(current: usize) -> usize {
    (current % THEME_SELECTION_MODULUS + 1) % THEME_SELECTION_MODULUS
}

/// Restore the persisted index; anything absent or non-numeric yields 0.
pub fn restore_theme_index<S: KeyValueStore + ?Sized>(store: &S) -> usize {
    store
        .get(THEME_INDEX_KEY)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

/// Advance from `current`, persist the result, and return it. A rejected
/// write is logged; the new index still applies for this page view.
pub fn cycle_theme_index<S: KeyValueStore + ?Sized>(store: &S, current: usize) -> usize {
    let next = next_theme_index(current);
    if let Err(err) = store.set(THEME_INDEX_KEY, &next.to_string()) {
        log::warn!("Could not persist theme index: {err}");
    }
    next
}
