//! Loading indicator

use dioxus::prelude::*;

/// Centered ring spinner shown while a screen or the initial session
/// check is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-3",
            span {
                class: "h-8 w-8 rounded-full border-4 border-sky-200 border-t-sky-600 animate-spin",
                role: "status",
                aria_label: "Loading",
            }
            p { class: "text-sm text-gray-500", "Loading..." }
        }
    }
}
