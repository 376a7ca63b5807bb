mod backend;
mod components;

use components::nav_bar::NavComponent;
use components::pyqs_page::PyqsComponent;
use components::AppState;

use backend::config::{PortalConfig, DEFAULT_CONFIG_PATH};
use dioxus::prelude::*;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    PyqsComponent {},
}

fn main() {
    let (config, config_error) = match PortalConfig::load(Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };

    // The web build keeps the Dioxus console logger.
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(config.tracing_level())
            .try_init();
    }

    if let Some(e) = config_error {
        warn!(path = DEFAULT_CONFIG_PATH, error = %e, "Falling back to default portal config");
    }
    info!(
        faculty = config.session.faculty_label(),
        seed_demo_data = config.seed_demo_data,
        "Starting PYQ portal"
    );

    let _ = CONFIG.set(config);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let fallback = PortalConfig::default();
    let app_state = AppState::new(CONFIG.get().unwrap_or(&fallback));
    use_context_provider(|| app_state);

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
