use crate::components::Icon;
use dioxus::prelude::*;

/// Static about/contact overlay.
#[component]
pub fn AboutPanel(on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "about-overlay", onclick: move |e| on_close.call(e),
            div {
                class: "about-panel",
                onclick: move |e| e.stop_propagation(),
                div { class: "about-header",
                    h2 { class: "about-title", "About Driftwave" }
                    button {
                        class: "icon-btn",
                        aria_label: "Close",
                        onclick: move |e| on_close.call(e),
                        Icon { name: "x".to_string(), class: "icon-sm".to_string() }
                    }
                }
                p { class: "about-body",
                    "Driftwave loops ambient radio streams with a fresh scene "
                    "behind every retune. Streams and artwork belong to their "
                    "broadcasters and creators."
                }
                p { class: "about-body",
                    "Found a dead stream or want yours listed? Write to "
                    span { class: "about-contact", "hello@driftwave.fm" }
                    "."
                }
                p { class: "about-fineprint",
                    "The listener count is simulated and purely decorative."
                }
            }
        }
    }
}
