use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{Button, ButtonType, Card, Icon};
use crate::content::{Anchor, CONTACT_DETAILS, Glyph};

/// Inquiry form and contact details.
///
/// The form is a placeholder: nothing is sent anywhere. Submission is
/// cancelled so the browser does not navigate or issue a request.
#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::info!("contact form submitted; no backend is wired, inquiry discarded");
    };

    view! {
        <section id=Anchor::Contact.id() class="section contact">
            <div class="container">
                <div class="section-header section-header-centered">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-description">
                        "Tell us about your mission profile and operating environment."
                    </p>
                </div>
                <div class="contact-grid">
                    <Card class="contact-form-card">
                        <form class="contact-form" on:submit=on_submit>
                            <div class="field">
                                <label for="contact-name">"Name"</label>
                                <input id="contact-name" name="name" class="input" placeholder="Jane Doe" />
                            </div>
                            <div class="field-row">
                                <div class="field">
                                    <label for="contact-email">"Email"</label>
                                    <input
                                        id="contact-email"
                                        name="email"
                                        type="email"
                                        class="input"
                                        placeholder="name@company.com"
                                    />
                                </div>
                                <div class="field">
                                    <label for="contact-organization">"Organization"</label>
                                    <input
                                        id="contact-organization"
                                        name="organization"
                                        class="input"
                                        placeholder="Agency / Company"
                                    />
                                </div>
                            </div>
                            <div class="field">
                                <label for="contact-message">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows="4"
                                    class="input"
                                    placeholder="Mission needs, payloads, environments…"
                                ></textarea>
                            </div>
                            <Button button_type=ButtonType::Submit class="btn-primary">
                                "Send Inquiry"
                            </Button>
                            <p class="fine-print form-disclosure">
                                "This is a static demo form. Wire to your backend or a service like Formspree when deploying."
                            </p>
                        </form>
                    </Card>
                    <div class="contact-aside">
                        <Card class="contact-details">
                            <div class="contact-line">
                                <Icon glyph=Glyph::Mail class="icon-sm" />
                                <span>{CONTACT_DETAILS.email}</span>
                            </div>
                            <div class="contact-line">
                                <Icon glyph=Glyph::Phone class="icon-sm" />
                                <span>{CONTACT_DETAILS.phone}</span>
                            </div>
                            <div class="contact-line">
                                <Icon glyph=Glyph::MapPin class="icon-sm" />
                                <span>{CONTACT_DETAILS.headquarters}</span>
                            </div>
                            <p class="fine-print">"Replace with your real contact details before launch."</p>
                        </Card>
                    </div>
                </div>
            </div>
        </section>
    }
}
