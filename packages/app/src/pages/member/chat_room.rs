//! Single chat room page

use dioxus::prelude::*;
use uuid::Uuid;
use waypoint_api::ApiError;

use crate::components::{ErrorNotice, LoadingSpinner, MessageBubble};
use crate::routes::Route;
use crate::session::use_session;

/// Message history and send box for one conversation
#[component]
pub fn ChatRoom(id: String) -> Element {
    let session = use_session();
    // Hooks run unconditionally; the id check comes after all of them so
    // the hook order never depends on the prop.
    let parsed_id: Option<Uuid> = id.parse().ok();

    let fetch_session = session.clone();
    let mut messages = use_resource(move || {
        let session = fetch_session.clone();
        async move {
            let Some(room_id) = parsed_id else {
                return Err(ApiError::Status {
                    status: 404,
                    message: "unknown conversation".to_string(),
                });
            };
            session.observe(session.api().room_messages(room_id).await)
        }
    });

    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let Some(room_id) = parsed_id else {
        return rsx! {
            ErrorNotice { message: "Unknown conversation" }
        };
    };

    let current_user = session.state.read().user_id().map(str::to_string);

    let handle_send = move |_| {
        let session = session.clone();
        let body = draft().trim().to_string();
        if body.is_empty() {
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match session.observe(session.api().send_message(room_id, body).await) {
                Ok(_) => {
                    draft.set(String::new());
                    messages.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col h-[calc(100vh-8rem)]",

            Link {
                to: Route::Chat {},
                class: "text-sm text-sky-700 hover:underline mb-4",
                "\u{2190} All conversations"
            }

            if let Some(err) = error() {
                div { class: "mb-4", ErrorNotice { message: err } }
            }

            div {
                class: "flex-1 overflow-y-auto space-y-3 pb-4",
                match &*messages.read() {
                    None => rsx! {
                        div { class: "py-12", LoadingSpinner {} }
                    },
                    Some(Err(e)) => rsx! {
                        ErrorNotice { message: "Couldn't load messages: {e}" }
                    },
                    Some(Ok(messages)) => rsx! {
                        for message in messages.clone() {
                            MessageBubble {
                                key: "{message.id}",
                                own: current_user.as_deref() == Some(message.sender_id.as_str()),
                                message,
                            }
                        }
                    },
                }
            }

            form {
                onsubmit: handle_send,
                class: "flex gap-2 pt-3 border-t border-gray-200",
                input {
                    r#type: "text",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    placeholder: "Write a message...",
                    class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                    disabled: is_pending()
                }
                button {
                    r#type: "submit",
                    class: "bg-sky-700 text-white py-2 px-6 rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_pending(),
                    "Send"
                }
            }
        }
    }
}
