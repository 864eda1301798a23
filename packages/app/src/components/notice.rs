//! Error notice component

use dioxus::prelude::*;

/// Props for ErrorNotice
#[derive(Props, Clone, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
}

/// Inline error banner for failed loads and submissions
#[component]
pub fn ErrorNotice(props: ErrorNoticeProps) -> Element {
    rsx! {
        div {
            class: "p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
            "{props.message}"
        }
    }
}
