//! Scroll-triggered entrance animations.
//!
//! Sections never talk to the browser's visibility APIs directly. They wrap
//! content in [`Reveal`], which asks the [`Watcher`] from context to call
//! back once when the element first enters the viewport. The CSS classes do
//! the actual animating.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{SiteConfig, use_site_config};
use crate::error::{Result, SiteError};

/// Capability to run a callback the first time an element becomes visible.
pub trait ViewportWatcher: Send + Sync {
    /// Arrange for `on_enter` to run at most once, when at least
    /// `threshold` of `target` is inside the viewport.
    fn watch_once(
        &self,
        target: &Element,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<()>;
}

/// Browser implementation backed by `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionWatcher;

impl ViewportWatcher for IntersectionWatcher {
    fn watch_once(
        &self,
        target: &Element,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<()> {
        let mut pending = Some(on_enter);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !entered {
                    return;
                }
                observer.disconnect();
                if let Some(on_enter) = pending.take() {
                    on_enter();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::observer(&e))?;
        observer.observe(target);

        // Owned by the observer from here on; the page is mounted once and never unmounted.
        callback.forget();
        Ok(())
    }
}

/// Shared handle to the active [`ViewportWatcher`], passed through context.
#[derive(Clone)]
pub struct Watcher(Arc<dyn ViewportWatcher>);

impl Watcher {
    pub fn new(inner: impl ViewportWatcher + 'static) -> Self {
        Self(Arc::new(inner))
    }

    pub fn watch_once(
        &self,
        target: &Element,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<()> {
        self.0.watch_once(target, threshold, on_enter)
    }
}

impl Default for Watcher {
    fn default() -> Self {
        Self::new(IntersectionWatcher)
    }
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Watcher")
    }
}

pub fn use_watcher() -> Watcher {
    use_context::<Watcher>().unwrap_or_default()
}

/// One-way latch: once shown, an element stays shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Mark as shown. Returns `true` only on the first call.
    pub fn enter(&mut self) -> bool {
        let first = *self == Visibility::Hidden;
        *self = Visibility::Shown;
        first
    }

    pub fn class(self) -> &'static str {
        match self {
            Visibility::Hidden => "is-hidden",
            Visibility::Shown => "is-visible",
        }
    }
}

/// Reveal delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize, config: &SiteConfig) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.stagger_ms)
}

/// Inline style carrying the offset and per-index delay.
pub fn reveal_style(index: usize, config: &SiteConfig) -> String {
    format!(
        "--reveal-offset: {}px; transition-delay: {}ms;",
        config.reveal_offset_px,
        stagger_delay_ms(index, config)
    )
}

/// Wrapper that slides its children up and fades them in the first time
/// they scroll into view. Does not replay.
#[component]
pub fn Reveal(
    /// Position within a staggered group
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = use_site_config();
    let watcher = use_watcher();
    let visibility = RwSignal::new(Visibility::Hidden);
    let node = NodeRef::<html::Div>::new();
    let threshold = config.reveal_threshold;
    let style = reveal_style(index, &config);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        let reveal = move || {
            visibility.update(|v| {
                if v.enter() {
                    tracing::debug!(index, "reveal");
                }
            })
        };
        if let Err(err) = watcher.watch_once(&el, threshold, Box::new(reveal)) {
            tracing::warn!(%err, "viewport watcher unavailable, revealing immediately");
            reveal();
        }
    });

    view! {
        <div
            node_ref=node
            class=move || format!("reveal {} {}", visibility.get().class(), class).trim_end().to_string()
            style=style
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visibility_latches_once() {
        let mut v = Visibility::default();
        assert_eq!(v, Visibility::Hidden);
        assert!(v.enter());
        assert!(!v.enter());
        assert_eq!(v, Visibility::Shown);
    }

    #[test]
    fn stagger_is_fifty_ms_per_index() {
        let config = SiteConfig::default();
        assert_eq!(stagger_delay_ms(0, &config), 0);
        assert_eq!(stagger_delay_ms(1, &config), 50);
        assert_eq!(stagger_delay_ms(2, &config), 100);
    }

    #[test]
    fn stagger_saturates() {
        let config = SiteConfig::default();
        assert_eq!(stagger_delay_ms(usize::MAX, &config), u32::MAX);
    }

    #[test]
    fn style_starts_twenty_px_below() {
        let style = reveal_style(2, &SiteConfig::default());
        assert_eq!(style, "--reveal-offset: 20px; transition-delay: 100ms;");
    }
}
