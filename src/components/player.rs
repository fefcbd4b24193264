use crate::components::{attempt_play, Icon, PlaybackErrorSignal};
use crate::controller::{with_rng, Controller, ToggleAction};
use dioxus::prelude::*;

#[component]
pub fn Player() -> Element {
    let mut controller = use_context::<Signal<Controller>>();
    let playback_error = use_context::<PlaybackErrorSignal>().0;

    let snapshot = controller();
    let tuned = snapshot.is_tuned();
    let station = snapshot.station();
    let volume = snapshot.volume();

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            controller.write().set_volume((val / 100.0).clamp(0.0, 1.0));
        }
    };

    rsx! {
        if let Some(message) = playback_error() {
            div { class: "player-toast-anchor",
                div { class: "player-toast", "{message}" }
            }
        }
        div { class: "player-shell",
            // Station info
            div { class: "station-info",
                div { class: "station-art",
                    Icon { name: "radio".to_string(), class: "icon-md".to_string() }
                }
                div { class: "station-lines",
                    if tuned {
                        p { class: "station-name", "{station.name}" }
                        p { class: "station-sub", "Internet radio" }
                    } else {
                        p { class: "station-name station-name--idle", "No station tuned" }
                        p { class: "station-sub", "Play starts the stream" }
                    }
                }
            }

            // Player controls
            div { class: "player-controls",
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
            }

            // Volume
            div { class: "volume-group",
                Icon { name: "volume".to_string(), class: "icon-sm volume-icon".to_string() }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: (volume * 100.0).round() as i32,
                    class: "volume-slider",
                    aria_label: "Volume",
                    oninput: on_volume_change,
                }
            }
        }
    }
}

/// Play/Pause button - completely isolated component
#[component]
fn PlayPauseButton() -> Element {
    let mut controller = use_context::<Signal<Controller>>();
    let playback_error = use_context::<PlaybackErrorSignal>().0;
    let glyph = controller().glyph();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "control-btn control-btn--primary",
            aria_label: "Play or pause",
            onclick: move |_| {
                let action = with_rng(|rng| controller.write().toggle(rng));
                if action == ToggleAction::Resume {
                    attempt_play(controller, playback_error);
                }
            },
            Icon { name: glyph.to_string(), class: "icon-md".to_string() }
        }
    }
}

/// Previous button - retunes to a random station, like the dial it replaces
#[component]
fn PrevButton() -> Element {
    let mut controller = use_context::<Signal<Controller>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control-btn",
            aria_label: "Previous station",
            onclick: move |_| {
                with_rng(|rng| controller.write().prev_station(rng));
            },
            Icon { name: "prev".to_string(), class: "icon-sm".to_string() }
        }
    }
}

/// Next button - completely isolated component
#[component]
fn NextButton() -> Element {
    let mut controller = use_context::<Signal<Controller>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control-btn",
            aria_label: "Next station",
            onclick: move |_| {
                with_rng(|rng| controller.write().next_station(rng));
            },
            Icon { name: "next".to_string(), class: "icon-sm".to_string() }
        }
    }
}
