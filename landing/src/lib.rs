//! # aurex-landing
//!
//! Single-page marketing site for Aurex Aerospace, written with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The page is a fixed content tree ([`content`]) rendered by stateless
//! sections ([`sections`]) built from a few primitives ([`components`]).
//! The root [`App`] owns the only mutable state, the mobile menu
//! ([`menu::MenuState`]). Platform cards fade in on first scroll into view
//! through the [`reveal`] module.
//!
//! ## Builds
//!
//! - `csr` feature: browser bundle, mounted by the `aurex-landing` binary
//!   (`trunk serve` in `landing/`).
//! - `ssr` feature (default): static HTML via [`render_page`] and
//!   [`render_document`], used for prerendering and tests.
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! let html = aurex_landing::render_page();
//! assert!(html.contains(r#"id="platforms""#));
//! # }
//! ```

pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod menu;
pub mod mount;
pub mod reveal;
pub mod sections;

pub use app::App;
pub use config::SiteConfig;
pub use error::{Result, SiteError};
#[cfg(feature = "csr")]
pub use mount::mount;

/// Render the page body (everything inside the mount element) to HTML.
#[cfg(feature = "ssr")]
pub fn render_page() -> String {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| view! { <App /> }.to_html())
}

/// Render a complete HTML document with the page prerendered into the
/// mount element.
#[cfg(feature = "ssr")]
pub fn render_document() -> String {
    let config = SiteConfig::default();
    let brand = &content::BRAND;
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{name}</title>\n\
         <meta name=\"description\" content=\"{tagline}\">\n\
         <link rel=\"icon\" href=\"{logo}\">\n\
         <link rel=\"stylesheet\" href=\"/style.css\">\n\
         </head>\n<body>\n<div id=\"{mount}\">{page}</div>\n</body>\n</html>\n",
        name = brand.name,
        tagline = brand.tagline,
        logo = content::LOGO_SRC,
        mount = config.mount_id,
        page = render_page(),
    )
}
