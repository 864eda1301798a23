//! Chat message bubble component

use dioxus::prelude::*;
use waypoint_api::types::ChatMessage;

/// Props for MessageBubble
#[derive(Props, Clone, PartialEq)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
    /// Whether the current user sent this message.
    pub own: bool,
}

/// A single chat message, aligned by sender
#[component]
pub fn MessageBubble(props: MessageBubbleProps) -> Element {
    let message = &props.message;
    let sent = message.sent_at.format("%H:%M");

    rsx! {
        div {
            class: if props.own { "flex justify-end" } else { "flex justify-start" },
            div {
                class: if props.own {
                    "max-w-md bg-sky-600 text-white rounded-2xl rounded-br-sm px-4 py-2"
                } else {
                    "max-w-md bg-gray-100 text-gray-900 rounded-2xl rounded-bl-sm px-4 py-2"
                },
                if !props.own {
                    p { class: "text-xs font-medium text-sky-700 mb-0.5", "{message.sender_name}" }
                }
                p { class: "text-sm whitespace-pre-wrap", "{message.body}" }
                p {
                    class: if props.own { "text-xs text-sky-200 mt-1 text-right" } else { "text-xs text-gray-400 mt-1 text-right" },
                    "{sent}"
                }
            }
        }
    }
}
