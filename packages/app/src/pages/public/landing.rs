//! Public landing page

use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page shown to signed-out visitors
#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-sky-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-5xl mx-auto px-4 py-16 text-center",
                    h1 {
                        class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                        "Waypoint"
                    }
                    p {
                        class: "text-lg sm:text-xl text-gray-600 mb-8 max-w-2xl mx-auto",
                        "Plan trips together, swap tips on the community board, and keep the group chat in one place."
                    }
                    Link {
                        to: Route::Login {},
                        class: "inline-block bg-sky-700 text-white py-3 px-8 rounded-md hover:bg-sky-800 font-medium",
                        "Sign in to get started"
                    }
                }
            }

            div {
                class: "max-w-5xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-6",
                FeatureCard {
                    icon: "\u{1F5FA}",
                    title: "Trip planning",
                    body: "Pick a destination and a date range and get a day-by-day plan to refine with your group."
                }
                FeatureCard {
                    icon: "\u{1F4AC}",
                    title: "Community board",
                    body: "Ask locals and fellow travellers, share finds, and search past threads."
                }
                FeatureCard {
                    icon: "\u{1F465}",
                    title: "Group chat",
                    body: "Direct and group conversations with everyone on the trip."
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-6",
            span { class: "text-3xl", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-gray-900 mt-3 mb-1", "{props.title}" }
            p { class: "text-sm text-gray-600", "{props.body}" }
        }
    }
}
