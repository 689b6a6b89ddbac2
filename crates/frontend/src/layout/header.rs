use crate::shared::icons::{icon, IconKind};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon(IconKind::Dashboard)}</span>
                <span class="header__title">"Analytics"</span>
            </div>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
