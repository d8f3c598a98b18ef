use leptos::prelude::*;

use crate::components::{Card, Icon};
use crate::content::{Anchor, FEATURES};

#[component]
pub fn Capabilities() -> impl IntoView {
    view! {
        <section id=Anchor::Capabilities.id() class="section capabilities">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Capabilities"</h2>
                    <p class="section-description">"Modular by design, mission-ready from day one."</p>
                </div>
                <div class="capabilities-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <Card class="feature-card">
                                    <Icon glyph=feature.icon class="icon-lg icon-accent" />
                                    <div class="feature-title">{feature.title}</div>
                                    <p class="feature-description">{feature.description}</p>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
