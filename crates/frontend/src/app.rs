use std::sync::Arc;

use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::dashboards::OverviewDashboard;
use crate::layout::Shell;
use crate::shared::theme::{LocalStoragePreferences, ThemeProvider};

const THEME_STORAGE_KEY: &str = "theme";

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ThemeProvider store=Arc::new(LocalStoragePreferences::new(THEME_STORAGE_KEY))>
                <Shell>
                    <OverviewDashboard />
                </Shell>
            </ThemeProvider>
        </ConfigProvider>
    }
}
