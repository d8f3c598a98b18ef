use leptos::prelude::*;

use crate::content::{LOGO_ALT, LOGO_SRC};

/// Brand mark. Source and alt text are fixed; only the size class varies.
///
/// A missing asset shows the browser's broken-image placeholder and nothing
/// else breaks.
#[component]
pub fn Logo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <img src=LOGO_SRC alt=LOGO_ALT class=super::merge_class("logo", &class) draggable="false" /> }
}
