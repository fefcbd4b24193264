use crate::controller::Controller;
use dioxus::prelude::*;

/// Full-viewport artwork behind the page. The controller re-picks the image
/// on every station load, so retuning always swaps the scenery even when the
/// stream itself refuses to start.
#[component]
pub fn Backdrop() -> Element {
    let controller = use_context::<Signal<Controller>>();
    let url = controller().backdrop();

    rsx! {
        div { class: "backdrop", style: "background-image: url('{url}');" }
        div { class: "backdrop-scrim" }
    }
}
