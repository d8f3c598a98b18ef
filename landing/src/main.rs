// Aurex Aerospace landing page - Leptos 0.8 CSR entry point

use tracing::level_filters::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    aurex_landing::logging::init(level);

    if let Err(err) = aurex_landing::mount(aurex_landing::SiteConfig::default()) {
        tracing::error!(%err, "failed to mount landing page");
    }
}
