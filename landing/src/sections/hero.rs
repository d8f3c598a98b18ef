use leptos::prelude::*;

use crate::components::{Button, Logo};
use crate::config::use_site_config;
use crate::content::{Anchor, BRAND};

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_site_config();
    let intro = format!("animation-duration: {}ms;", config.hero_intro_ms);

    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-inner">
                <div class="hero-intro" style=intro>
                    <Logo class="logo-hero" />
                    <h1 class="hero-title">"The Aurex UAS Family"</h1>
                    <p class="hero-tagline">{BRAND.tagline}</p>
                    <div class="hero-actions">
                        <Button href=Anchor::Platforms.href() class="btn-primary">
                            "Explore Platforms"
                        </Button>
                        <Button href=Anchor::Heps.href() class="btn-secondary">
                            "Learn about HEPS"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
