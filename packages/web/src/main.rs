use dioxus::prelude::*;
use studio::StudioConfig;
use tracing::Level;

use views::{Blocks, Editor, Preview, StudioLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(StudioLayout)]
        #[route("/")]
        Editor {},
        #[route("/blocks")]
        Blocks {},
        #[route("/preview")]
        Preview {},
}

/// Embedded `studio.toml`; see [`StudioConfig`] for the format.
const STUDIO_TOML: &str = include_str!("../studio.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}

/// Parse the embedded configuration, falling back to defaults on error.
fn load_config() -> StudioConfig {
    match StudioConfig::from_toml(STUDIO_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; using default configuration");
            StudioConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Title { "Site Studio" }
        document::Link { rel: "stylesheet", href: ui::STUDIO_CSS }

        ui::StudioProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
