//! Presentational primitives shared by every section.
//!
//! # Component Hierarchy
//!
//! ```text
//! Button  - <a> or <button> with the base `btn` class
//! Card    - bordered, padded container
//! Logo    - fixed brand image
//! Icon    - inline SVG for a content Glyph
//! ```

mod button;
mod card;
mod icons;
mod logo;

pub use button::{Button, ButtonType};
pub use card::Card;
pub use icons::{Icon, glyph_paths};
pub use logo::Logo;

/// Join a fixed base class with an optional caller class.
pub(crate) fn merge_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::merge_class;

    #[test]
    fn merge_skips_empty_extra() {
        assert_eq!(merge_class("card", ""), "card");
        assert_eq!(merge_class("card", "  "), "card");
        assert_eq!(merge_class("card", "hero-card"), "card hero-card");
    }
}
