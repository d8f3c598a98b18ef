use leptos::prelude::*;

use crate::clock::current_year;
use crate::components::Logo;
use crate::content::{BRAND, FOOTER_LINKS};

/// Copyright line, e.g. `2025 © Aurex Aerospace`.
pub fn copyright(year: i32) -> String {
    format!("{year} © {}", BRAND.name)
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <Logo class="logo-footer" />
                    <span class="footer-copyright">{copyright(current_year())}</span>
                </div>
                <div class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.anchor.href() class="footer-link">
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
