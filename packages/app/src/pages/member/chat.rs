//! Chat rooms page

use dioxus::prelude::*;

use crate::components::{ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::session::use_session;

/// List of the user's direct and group conversations
#[component]
pub fn Chat() -> Element {
    let session = use_session();

    let fetch_session = session.clone();
    let rooms = use_resource(move || {
        let session = fetch_session.clone();
        async move { session.observe(session.api().list_rooms().await) }
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Chat" }

            match &*rooms.read() {
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
                Some(Err(e)) => rsx! {
                    ErrorNotice { message: "Couldn't load your conversations: {e}" }
                },
                Some(Ok(rooms)) if rooms.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No conversations yet." }
                },
                Some(Ok(rooms)) => rsx! {
                    div {
                        class: "bg-white rounded-lg border border-gray-200 divide-y divide-gray-100",
                        for room in rooms.clone() {
                            Link {
                                key: "{room.id}",
                                to: Route::ChatRoom { id: room.id.to_string() },
                                class: "flex items-center gap-3 px-4 py-3 hover:bg-gray-50",
                                span {
                                    class: "text-xl",
                                    if room.is_group { "\u{1F465}" } else { "\u{1F4AC}" }
                                }
                                div {
                                    class: "min-w-0",
                                    p { class: "text-sm font-medium text-gray-900", "{room.name}" }
                                    if let Some(last) = &room.last_message {
                                        p { class: "text-sm text-gray-500 truncate", "{last}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
