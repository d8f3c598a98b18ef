use leptos::prelude::*;

use crate::components::{Button, Icon, Logo};
use crate::content::{Anchor, BRAND, Glyph, NAV};
use crate::menu::MenuState;

/// Sticky header: brand, desktop links, and the mobile menu.
///
/// The header never owns the menu state. It reads `menu` and reports
/// interactions through `on_toggle` / `on_navigate`.
#[component]
pub fn Header(
    #[prop(into)] menu: Signal<MenuState>,
    on_toggle: Callback<()>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <div class="header-brand">
                    <Logo class="logo-header" />
                    <span class="header-title">{BRAND.name}</span>
                </div>

                <nav class="nav-desktop">
                    {NAV
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.anchor.href() class="nav-link">
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Button href=Anchor::Contact.href() class="btn-primary">
                        "Request a Demo"
                        <Icon glyph=Glyph::ArrowRight class="icon-sm" />
                    </Button>
                </nav>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle Menu"
                    aria-controls="mobile-nav"
                    aria-expanded=move || menu.get().aria_expanded()
                    on:click=move |_| on_toggle.run(())
                >
                    <Icon glyph=Glyph::Menu />
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <div id="mobile-nav" class="nav-mobile">
                    <div class="container nav-mobile-inner">
                        {NAV
                            .iter()
                            .map(|entry| {
                                view! {
                                    <a
                                        href=entry.anchor.href()
                                        class="nav-link"
                                        on:click=move |_| on_navigate.run(())
                                    >
                                        {entry.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <Button href=Anchor::Contact.href() class="btn-primary" on_click=on_navigate>
                            "Request a Demo"
                        </Button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
