use dioxus::prelude::*;

mod catalog;
mod components;
mod controller;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Driftwave" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#0c0f14" }
        document::Meta {
            name: "description",
            content: "Looping ambient radio with a scene change on every retune.",
        }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
