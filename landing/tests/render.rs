//! Page-level checks on the statically rendered HTML.

#![cfg(feature = "ssr")]

use aurex_landing::content::{Anchor, FEATURES, NAV, VARIANTS};
use aurex_landing::render_page;
use aurex_landing::sections::copyright;
use pretty_assertions::assert_eq;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Slice of `html` from the opening of section `id` to the next `</section>`.
fn section<'a>(html: &'a str, id: &str) -> &'a str {
    let start = html
        .find(&format!(r#"id="{id}""#))
        .unwrap_or_else(|| panic!("section {id} missing"));
    let end = html[start..]
        .find("</section>")
        .map(|offset| start + offset)
        .unwrap_or(html.len());
    &html[start..end]
}

#[test]
fn every_anchor_resolves_to_exactly_one_section() {
    let html = render_page();
    for anchor in Anchor::ALL {
        assert_eq!(
            count(&html, &format!(r#"id="{}""#, anchor.id())),
            1,
            "anchor {}",
            anchor.id()
        );
    }
}

#[test]
fn nav_links_target_existing_sections() {
    let html = render_page();
    for entry in NAV {
        assert!(html.contains(&format!(r#"href="{}""#, entry.anchor.href())));
        assert!(html.contains(&format!(r#"id="{}""#, entry.anchor.id())));
    }
}

#[test]
fn one_card_per_variant_with_full_spec_grid() {
    let html = render_page();
    let platforms = section(&html, Anchor::Platforms.id());

    assert_eq!(count(platforms, r#"class="card variant-card""#), VARIANTS.len());
    for variant in VARIANTS {
        let heading = format!(r#"<h3 class="variant-name">{}</h3>"#, variant.name);
        assert_eq!(count(platforms, &heading), 1, "{}", variant.name);
    }

    let cells: usize = VARIANTS.iter().map(|v| v.specs.len()).sum();
    assert_eq!(count(platforms, r#"class="spec-cell""#), cells);
    assert_eq!(count(platforms, "Max Takeoff Weight"), VARIANTS.len());
}

#[test]
fn highlights_keep_their_order() {
    let html = render_page();
    for variant in VARIANTS {
        let positions: Vec<usize> = variant
            .highlights
            .iter()
            .map(|h| {
                let escaped = h.replace('&', "&amp;");
                html.find(&escaped)
                    .unwrap_or_else(|| panic!("missing highlight {h}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", variant.name);
    }
}

#[test]
fn platform_cards_start_hidden_with_staggered_delay() {
    let html = render_page();
    let platforms = section(&html, Anchor::Platforms.id());

    assert_eq!(count(platforms, "reveal is-hidden"), VARIANTS.len());
    for delay in ["transition-delay: 0ms;", "transition-delay: 50ms;", "transition-delay: 100ms;"] {
        assert_eq!(count(platforms, delay), 1, "{delay}");
    }
}

#[test]
fn capabilities_render_every_feature() {
    let html = render_page();
    let capabilities = section(&html, Anchor::Capabilities.id());

    assert_eq!(count(capabilities, r#"class="card feature-card""#), FEATURES.len());
    for feature in FEATURES {
        let title = feature.title.replace('&', "&amp;");
        assert!(capabilities.contains(&title), "{}", feature.title);
    }
}

#[test]
fn footer_shows_current_year() {
    let html = render_page();
    let year = chrono::Local::now().format("%Y").to_string();
    let expected = copyright(year.parse().expect("four digit year"));

    assert!(expected.starts_with(&year));
    assert!(html.contains(&expected));
}

#[test]
fn mobile_menu_starts_closed() {
    let html = render_page();
    assert!(html.contains(r#"aria-label="Toggle Menu""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains(r#"id="mobile-nav""#));
}

#[test]
fn contact_form_has_no_action_and_discloses_it() {
    let html = render_page();
    let contact = section(&html, Anchor::Contact.id());

    for name in ["name", "email", "organization", "message"] {
        assert!(contact.contains(&format!(r#"name="{name}""#)), "field {name}");
    }
    assert!(!contact.contains("action="));
    assert!(!contact.contains("method="));
    assert!(contact.contains(r#"type="submit""#));
    assert!(contact.contains("This is a static demo form."));
}

#[test]
fn logos_are_fixed_and_not_draggable() {
    let html = render_page();
    let logos = count(&html, r#"src="/aurex-logo.png""#);

    // header, hero, one per platform card, footer
    assert_eq!(logos, 3 + VARIANTS.len());
    assert_eq!(count(&html, r#"alt="Aurex Aerospace Logo""#), logos);
    assert_eq!(count(&html, r#"draggable="false""#), logos);
}
