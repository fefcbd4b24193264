use crate::components::{
    AboutPanel, AudioController, Backdrop, Icon, KeyboardShortcuts, ListenerBadge, Player,
};
use crate::controller::Controller;
use dioxus::prelude::*;

/// User-visible playback notice (autoplay rejection, dead stream, ...).
#[derive(Clone, Copy)]
pub struct PlaybackErrorSignal(pub Signal<Option<String>>);

#[component]
pub fn AppShell() -> Element {
    let controller = use_signal(Controller::new);
    let playback_error = use_signal(|| None::<String>);
    let mut about_open = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| controller);
    use_context_provider(|| PlaybackErrorSignal(playback_error));

    let station = controller().station();
    let tuned = controller().is_tuned();

    rsx! {
        Backdrop {}
        div { class: "page-shell",
            header { class: "top-bar",
                div { class: "brand",
                    Icon { name: "radio".to_string(), class: "brand-icon".to_string() }
                    span { class: "brand-name", "Driftwave" }
                }
                div { class: "top-actions",
                    ListenerBadge {}
                    button {
                        class: "icon-btn",
                        aria_label: "About this station",
                        onclick: move |_| about_open.set(!about_open()),
                        Icon { name: "info".to_string(), class: "icon-sm".to_string() }
                    }
                }
            }
            main { class: "stage",
                p { class: "stage-kicker", "Now tuned" }
                h1 { class: "stage-title",
                    if tuned {
                        "{station.name}"
                    } else {
                        "Pick a wave"
                    }
                }
                p { class: "stage-hint",
                    if tuned {
                        "Looping live - lean back"
                    } else {
                        "Press play or hit space to start the stream"
                    }
                }
            }
            Player {}
        }
        if about_open() {
            AboutPanel { on_close: move |_| about_open.set(false) }
        }
        AudioController {}
        KeyboardShortcuts {}
    }
}
