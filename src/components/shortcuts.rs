//! Global keyboard shortcuts, active whenever the page has focus: space
//! toggles play/pause, left/right retune, up/down nudge the volume by 0.1.

#[cfg(target_arch = "wasm32")]
use crate::controller::{Controller, VOLUME_STEP};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn click_player_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn KeyboardShortcuts() -> Element {
    let controller = use_context::<Signal<Controller>>();

    use_effect(move || {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };

        let runtime = Runtime::current();
        let mut controller = controller.clone();
        let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.default_prevented()
                || event.is_composing()
                || is_editable_shortcut_target(&event)
            {
                return;
            }
            if event.meta_key() || event.ctrl_key() || event.alt_key() {
                return;
            }

            let key = event.key();
            match key.as_str() {
                " " | "Spacebar" => {
                    event.prevent_default();
                    click_player_control_button("play-pause-btn");
                }
                "ArrowRight" => {
                    event.prevent_default();
                    click_player_control_button("next-btn");
                }
                "ArrowLeft" => {
                    event.prevent_default();
                    click_player_control_button("prev-btn");
                }
                "ArrowUp" => {
                    event.prevent_default();
                    let _guard = RuntimeGuard::new(runtime.clone());
                    controller.write().step_volume(VOLUME_STEP);
                }
                "ArrowDown" => {
                    event.prevent_default();
                    let _guard = RuntimeGuard::new(runtime.clone());
                    controller.write().step_volume(-VOLUME_STEP);
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);

        let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
        key_cb.forget();
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn KeyboardShortcuts() -> Element {
    rsx! {}
}
