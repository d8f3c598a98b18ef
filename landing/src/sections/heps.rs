use leptos::prelude::*;

use crate::components::{Card, Icon};
use crate::content::{Anchor, HEPS_BENEFITS, REFERENCE_ARCHITECTURE};

/// Hybrid Electric Propulsion System explainer.
#[component]
pub fn Heps() -> impl IntoView {
    view! {
        <section id=Anchor::Heps.id() class="section heps">
            <div class="container heps-grid">
                <div>
                    <h2 class="section-title">"Hybrid Electric Propulsion System (HEPS)"</h2>
                    <p class="heps-lead">
                        "HEPS combines a compact turbine generator with high-efficiency electric propulsion. "
                        "The turbine maintains battery state-of-charge and provides sustained power for long "
                        "endurance while electric motors deliver quiet, responsive thrust for takeoff, cruise, "
                        "and precision maneuvering."
                    </p>
                    <ul class="heps-benefits">
                        {HEPS_BENEFITS
                            .iter()
                            .map(|(glyph, text)| {
                                view! {
                                    <li>
                                        <Icon glyph=*glyph class="icon-md" />
                                        <span>{*text}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <Card class="heps-card">
                    <h3 class="card-title">"Reference Architecture (notional)"</h3>
                    <ol class="heps-architecture">
                        {REFERENCE_ARCHITECTURE.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                    </ol>
                    <p class="fine-print">
                        "Note: All figures and specs are placeholders and will be replaced with validated engineering data."
                    </p>
                </Card>
            </div>
        </section>
    }
}
