//! Theme Switcher - Dioxus application binary
//!
//! Build with `dx serve --features web` (browser) or `--features desktop`.

use theme_switcher::app::App;

fn main() {
    init_logging();

    tracing::info!(
        "Starting Theme Switcher v{} ({})",
        env!("THEME_SWITCHER_VERSION"),
        env!("THEME_SWITCHER_GIT_SHA")
    );

    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theme_switcher=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Routes `tracing` to the browser console
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        // Only fails when a subscriber is already installed, which then receives this
        tracing::debug!("Logger already initialized: {}", e);
    }
}
