//! Page-wide settings, shared with components through Leptos context.

use leptos::prelude::*;

/// Tunables for mounting and entrance animations.
///
/// The site is fully static: there are no environment variables or config
/// files. Hosts embedding the page can still provide their own value before
/// rendering [`crate::App`].
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Id of the host element the page is mounted into
    pub mount_id: &'static str,
    /// Fraction of a card that must be visible before it reveals
    pub reveal_threshold: f64,
    /// Per-index delay between staggered reveals
    pub stagger_ms: u32,
    /// Vertical offset of a card before it reveals
    pub reveal_offset_px: u32,
    /// Duration of the hero load-in
    pub hero_intro_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_id: "root",
            reveal_threshold: 0.2,
            stagger_ms: 50,
            reveal_offset_px: 20,
            hero_intro_ms: 600,
        }
    }
}

/// Config from context, or the defaults when no ancestor provided one.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
