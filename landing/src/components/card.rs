use leptos::prelude::*;

use super::merge_class;

/// Bordered, padded panel.
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=merge_class("card", &class)>{children()}</div> }
}
