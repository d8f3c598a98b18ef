//! Root composition: page layout plus the menu state it owns.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::BRAND;
use crate::menu::{MenuEvent, MenuState};
use crate::reveal::Watcher;
use crate::sections::{Capabilities, Contact, Footer, Header, Heps, Hero, Platforms};

/// The whole page, sections in fixed vertical order.
///
/// Provides [`SiteConfig`] and [`Watcher`] to descendants unless an
/// ancestor already did.
#[component]
pub fn App() -> impl IntoView {
    if use_context::<SiteConfig>().is_none() {
        provide_context(SiteConfig::default());
    }
    if use_context::<Watcher>().is_none() {
        provide_context(Watcher::default());
    }

    let menu = RwSignal::new(MenuState::default());
    let dispatch = move |event: MenuEvent| {
        menu.update(|state| {
            let next = state.apply(event);
            if next != *state {
                tracing::debug!(from = %state, to = %next, ?event, "menu");
            }
            *state = next;
        });
    };
    let on_toggle = Callback::new(move |_| dispatch(MenuEvent::Toggle));
    let on_navigate = Callback::new(move |_| dispatch(MenuEvent::Navigate));

    view! {
        <div class="site" style=BRAND.palette.css_vars()>
            <Header menu=menu.read_only() on_toggle=on_toggle on_navigate=on_navigate />
            <main>
                <Hero />
                <Platforms />
                <Heps />
                <Capabilities />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
