use dioxus::prelude::*;

mod components;
mod error;

use components::GalleryScreen;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "max-width: 1152px; margin: 0 auto; padding: 24px; font-family: sans-serif;",
            GalleryScreen {}
        }
    }
}
