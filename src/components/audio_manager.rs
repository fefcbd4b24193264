//! Audio glue - projects controller state onto the single shared <audio>
//! element, outside of the component render cycle. The controller decides
//! what should be happening; this layer makes the browser do it and feeds
//! asynchronous play outcomes back in.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::PlaybackErrorSignal;
use crate::controller::Controller;
#[cfg(target_arch = "wasm32")]
use crate::controller::PlaybackError;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "driftwave-audio";

/// Initialize the global audio element once. The element loops natively so a
/// tuned stream keeps playing until the user pauses or retunes.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_loop(true);
    audio.set_attribute("preload", "none").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Read the element's MediaError, if any.
#[cfg(target_arch = "wasm32")]
fn media_error(audio: &HtmlAudioElement) -> Option<PlaybackError> {
    let audio_js = JsValue::from(audio.clone());
    let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    let code = js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;
    Some(PlaybackError::from_media_code(code))
}

#[cfg(target_arch = "wasm32")]
fn rejection_error(err: &JsValue) -> PlaybackError {
    let name = js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" => PlaybackError::AutoplayBlocked,
        "NotSupportedError" => PlaybackError::Unsupported,
        "AbortError" => PlaybackError::Aborted,
        _ => PlaybackError::Other,
    }
}

/// Ask the element to play and route the outcome into the controller. Only a
/// resolved promise raises the playing flag; a rejection (autoplay policy,
/// dead stream) logs, publishes the user-facing notice, and leaves the flag
/// where it was.
#[cfg(target_arch = "wasm32")]
pub fn attempt_play(mut controller: Signal<Controller>, mut notice: Signal<Option<String>>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };

    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => {
                        controller.write().finish_play(Ok(()));
                        notice.set(None);
                    }
                    Err(err) => {
                        let error = rejection_error(&err);
                        warn!("play attempt rejected: {error}");
                        controller.write().finish_play(Err(error.clone()));
                        notice.set(Some(error.to_string()));
                    }
                }
            });
        }
        Err(err) => {
            let error = rejection_error(&err);
            warn!("play attempt failed to start: {error}");
            controller.write().finish_play(Err(error.clone()));
            notice.set(Some(error.to_string()));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn attempt_play(_controller: Signal<Controller>, _notice: Signal<Option<String>>) {}

/// Audio controller hook - manages playback imperatively.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<Signal<Controller>>();
    let notice = use_context::<PlaybackErrorSignal>().0;
    let mut last_epoch = use_signal(|| 0u64);

    // Create the element and listen for stream-level errors (the play
    // promise does not see a source that dies after loading starts).
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        let runtime = Runtime::current();
        let mut notice = notice.clone();
        let error_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Some(audio) = get_or_create_audio_element() {
                if let Some(error) = media_error(&audio) {
                    warn!("stream error: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        }) as Box<dyn FnMut()>);
        let _ = audio.add_event_listener_with_callback("error", error_cb.as_ref().unchecked_ref());
        error_cb.forget();
    });

    // Attach the stream when the dial moves. The epoch also bumps when a
    // random retune lands on the current station, which still restarts the
    // stream from live.
    use_effect(move || {
        let epoch = controller().load_epoch();
        if epoch == 0 || epoch == *last_epoch.peek() {
            return;
        }
        last_epoch.set(epoch);

        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let station = controller.peek().station();
        let mut notice = notice.clone();
        notice.set(None);
        audio.set_src(station.stream_url);
        audio.set_volume(controller.peek().volume());
        attempt_play(controller, notice);
    });

    // Handle pause state changes. Resuming goes through attempt_play so the
    // playing flag only moves on a confirmed outcome.
    use_effect(move || {
        let playing = controller().is_playing();
        if let Some(audio) = get_or_create_audio_element() {
            if !playing && !audio.paused() {
                let _ = audio.pause();
            }
        }
    });

    // Handle volume changes, including the reset to the default level that
    // every station load performs.
    use_effect(move || {
        let volume = controller().volume();
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    });

    // Return empty element - this component just manages state
    rsx! {}
}

/// Audio controller hook - manages playback imperatively.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}
