pub mod footer;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |            Content           |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <sidebar::Sidebar />
                <main class="app-main">{children()}</main>
            </div>
            <footer::Footer />
        </div>
    }
}
