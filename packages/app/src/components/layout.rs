//! Layout wrapper for the protected section

use dioxus::prelude::*;

use crate::routes::Route;
use super::NavBar;

/// Layout for the signed-in area: navigation plus the routed screen.
/// Access control happens one level up, in the route guard.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            NavBar {}

            main {
                class: "max-w-5xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
