//! Inline SVG glyphs.
//!
//! Stroke icons on a 24x24 grid (Lucide style). Each [`Glyph`] maps to one or
//! more path data strings; size and color come from CSS.

use leptos::prelude::*;

use crate::content::Glyph;

/// Path data for a glyph, drawn with `stroke="currentColor"`.
pub fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Glyph::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        Glyph::Gauge => &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"],
        Glyph::Wind => &[
            "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
            "M9.6 4.6A2 2 0 1 1 11 8H2",
            "M12.6 19.4A2 2 0 1 0 14 16H2",
        ],
        Glyph::Shield => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        Glyph::Wrench => &[
            "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
        ],
        Glyph::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Glyph::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Glyph::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
        Glyph::Menu => &["M3 6h18", "M3 12h18", "M3 18h18"],
    }
}

/// Renders a glyph as an inline SVG.
///
/// # Props
///
/// * `glyph` - which icon to draw
/// * `class` - size/color classes (default: `"icon"`)
#[component]
pub fn Icon(glyph: Glyph, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {glyph_paths(glyph).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_path_data() {
        let all = [
            Glyph::ArrowRight,
            Glyph::Cpu,
            Glyph::Gauge,
            Glyph::Wind,
            Glyph::Shield,
            Glyph::Wrench,
            Glyph::Mail,
            Glyph::Phone,
            Glyph::MapPin,
            Glyph::Menu,
        ];
        for glyph in all {
            let paths = glyph_paths(glyph);
            assert!(!paths.is_empty(), "{glyph:?}");
            assert!(paths.iter().all(|d| !d.is_empty()));
        }
    }
}
