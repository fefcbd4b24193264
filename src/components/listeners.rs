use crate::controller::{sample_listeners, with_rng};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

/// Wall-clock interval between listener-count refreshes.
#[cfg(target_arch = "wasm32")]
const LISTENER_TICK_MS: u32 = 5_000;

/// Simulated "listeners tuned in" badge. The number is a fresh uniform draw
/// on every tick with no relation to any real audience, and the badge says
/// so; nothing on this page counts connections.
#[component]
pub fn ListenerBadge() -> Element {
    let mut listeners = use_signal(|| 0u32);

    use_effect(move || {
        listeners.set(with_rng(|rng| sample_listeners(rng)));

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            loop {
                TimeoutFuture::new(LISTENER_TICK_MS).await;
                listeners.set(with_rng(|rng| sample_listeners(rng)));
            }
        });
    });

    rsx! {
        div { class: "listener-badge", title: "Simulated listener count",
            span { class: "listener-dot" }
            span { "{listeners} listening" }
        }
    }
}
