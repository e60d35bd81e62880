use dioxus::prelude::*;

mod catalog;
mod components;
mod config;
mod diagnostics;
mod links;
mod model;
mod platform;

use components::AppView;
use config::SiteConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SiteConfig::default);

    rsx! {
        document::Meta { name: "theme-color", content: "#0a0a0a" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
