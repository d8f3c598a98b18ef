use leptos::either::Either;
use leptos::prelude::*;

use super::merge_class;

/// `type` attribute of a rendered `<button>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// Call-to-action control.
///
/// Renders an `<a>` when `href` is set, otherwise a `<button>`. The caller's
/// `class` is appended to the base `btn` style.
///
/// ```rust,ignore
/// view! { <Button href="#contact" class="btn-primary">"Request a Demo"</Button> }
/// ```
#[component]
pub fn Button(
    /// Link target; switches the element to `<a>`
    #[prop(optional, into)]
    href: Option<String>,
    /// Browsing context for links, e.g. `_blank`
    #[prop(optional)]
    target: Option<&'static str>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = merge_class("btn", &class);
    let click = move |_| {
        if let Some(cb) = on_click.as_ref() {
            cb.run(());
        }
    };

    match href {
        Some(href) => Either::Left(view! {
            <a href=href target=target class=class aria-label=aria_label on:click=click>
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <button type=button_type.as_str() class=class aria-label=aria_label on:click=click>
                {children()}
            </button>
        }),
    }
}
