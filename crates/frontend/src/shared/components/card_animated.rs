//! CardAnimated: Thaw `Card` with the `card-appear` entrance animation.
//!
//! ```ignore
//! <CardAnimated delay_ms=0>   // first panel
//! <CardAnimated delay_ms=80>  // second panel
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with `card-appear` from `static/style.css`.
///
/// `delay_ms` staggers panels that appear together.
#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card body
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=format!("panel {class}") attr:style=style>
            {children()}
        </Card>
    }
}
