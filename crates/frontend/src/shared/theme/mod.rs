//! Light/dark theme.
//!
//! The preference is read and written through [`PreferenceStore`], which the
//! app root injects; components never touch browser storage themselves.

use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

use crate::shared::icons::{icon, IconKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored preference value and `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown or missing preferences fall back to light
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persistence port for the theme preference
pub trait PreferenceStore {
    fn load_preference(&self) -> Option<String>;
    fn save_preference(&self, value: &str);
}

/// `PreferenceStore` backed by `window.localStorage`
#[derive(Debug, Clone, Copy)]
pub struct LocalStoragePreferences {
    key: &'static str,
}

impl LocalStoragePreferences {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn load_preference(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(self.key).ok().flatten())
    }

    fn save_preference(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(self.key, value) {
                log::warn!("Failed to save theme preference: {:?}", e);
            }
        }
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    Theme::from_preference(store.load_preference().as_deref())
}

/// Flip `current`, persist the result and return it
pub fn toggle_theme(current: Theme, store: &dyn PreferenceStore) -> Theme {
    let next = current.toggled();
    store.save_preference(next.as_str());
    next
}

/// Sets `data-theme` on `<html>`, the hook the stylesheet switches on
fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

#[derive(Clone)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    store: Arc<dyn PreferenceStore + Send + Sync>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = toggle_theme(self.theme.get_untracked(), self.store.as_ref());
        self.theme.set(next);
        apply_theme(next);
    }
}

/// Loads the stored theme and provides [`ThemeContext`] to children
#[component]
pub fn ThemeProvider(store: Arc<dyn PreferenceStore + Send + Sync>, children: Children) -> impl IntoView {
    let initial_theme = load_theme(store.as_ref());
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        store,
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button switching between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let theme = ctx.theme;

    view! {
        <button class="button button--ghost theme-toggle" on:click=move |_| ctx.toggle()>
            {move || match theme.get() {
                Theme::Light => view! { {icon(IconKind::Moon)} <span>"Dark"</span> }.into_any(),
                Theme::Dark => view! { {icon(IconKind::Sun)} <span>"Light"</span> }.into_any(),
            }}
        </button>
    }
}
