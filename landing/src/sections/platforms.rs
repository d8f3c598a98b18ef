use leptos::prelude::*;

use crate::components::{Button, Card, Logo};
use crate::content::{Anchor, ProductVariant, VARIANTS};
use crate::reveal::Reveal;

#[component]
pub fn Platforms() -> impl IntoView {
    view! {
        <section id=Anchor::Platforms.id() class="section platforms">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Platforms"</h2>
                    <p class="section-description">
                        "A common hybrid-electric architecture across three weight classes."
                    </p>
                </div>
                <div class="platforms-grid">
                    {VARIANTS
                        .iter()
                        .enumerate()
                        .map(|(idx, variant)| {
                            view! {
                                <Reveal index=idx>
                                    <VariantCard variant=*variant />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VariantCard(variant: ProductVariant) -> impl IntoView {
    view! {
        <Card class="variant-card">
            <div class="variant-heading">
                <div class="variant-badge">
                    <Logo class="logo-badge" />
                </div>
                <div>
                    <h3 class="variant-name">{variant.name}</h3>
                    <p class="variant-weight">{variant.weight_class}</p>
                </div>
            </div>

            <p class="variant-propulsion">{variant.propulsion}</p>

            <ul class="variant-highlights">
                {variant.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>

            <div class="spec-grid">
                {variant
                    .specs
                    .iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="spec-cell">
                                <div class="spec-label">{key.label()}</div>
                                <div class="spec-value">{*value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="variant-actions">
                <Button href=Anchor::Contact.href() class="btn-primary">
                    "Discuss Requirements"
                </Button>
                <Button href=Anchor::Heps.href() class="btn-secondary">
                    "Powertrain Details"
                </Button>
            </div>
        </Card>
    }
}
