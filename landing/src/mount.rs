//! Attaching the page to the host document.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SiteError};

/// Once-latch guarding the single attachment of the page.
#[derive(Debug, Default)]
pub struct MountGuard(AtomicBool);

impl MountGuard {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Succeeds for the first caller only.
    pub fn claim(&self) -> Result<()> {
        if self.0.swap(true, Ordering::SeqCst) {
            Err(SiteError::AlreadyMounted)
        } else {
            Ok(())
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(feature = "csr")]
static MOUNTED: MountGuard = MountGuard::new();

/// Mount [`crate::App`] into the element with id `config.mount_id`.
///
/// Any markup already inside the element (e.g. a prerendered copy) is
/// replaced. Fails if the element is missing or the page was mounted before.
#[cfg(feature = "csr")]
pub fn mount(config: crate::config::SiteConfig) -> Result<()> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::App;
    use crate::reveal::Watcher;

    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let id = config.mount_id;
    let root = document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MountPointMissing { id: id.to_string() })?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| SiteError::MountPointNotHtml { id: id.to_string() })?;

    MOUNTED.claim()?;
    root.set_inner_html("");

    leptos::mount::mount_to(root, move || {
        provide_context(config);
        provide_context(Watcher::default());
        view! { <App /> }
    })
    .forget();

    tracing::info!(mount_id = id, "page mounted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_one_claim() {
        let guard = MountGuard::new();
        assert!(!guard.is_claimed());
        assert!(guard.claim().is_ok());
        assert!(matches!(guard.claim(), Err(SiteError::AlreadyMounted)));
        assert!(guard.is_claimed());
    }
}
