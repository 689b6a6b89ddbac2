use crate::shared::icons::{icon, IconKind};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: IconKind,
    active: bool,
}

const MENU: [MenuItem; 3] = [
    MenuItem {
        label: "Overview",
        icon: IconKind::Dashboard,
        active: true,
    },
    MenuItem {
        label: "Customers",
        icon: IconKind::Customers,
        active: false,
    },
    MenuItem {
        label: "Revenue",
        icon: IconKind::Revenue,
        active: false,
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <aside data-zone="left" class="sidebar">
            <nav class="sidebar__nav">
                {MENU
                    .iter()
                    .map(|item| {
                        view! {
                            <div
                                class={if item.active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }}
                                aria-current=item.active.then_some("page")
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">{format!("© {year} Analytics")}</div>
        </aside>
    }
}
