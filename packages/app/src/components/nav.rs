//! Main navigation component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

/// Navigation bar for the signed-in area
#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        let session = session.clone();
        spawn(async move {
            // Local state resets regardless of the backend outcome.
            if let Err(e) = session.logout().await {
                tracing::warn!("server-side logout failed: {e}");
            }
            navigator.push(Route::Landing {});
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Trips {},
                        class: "text-xl font-bold text-sky-700",
                        "Waypoint"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Trips {}, label: "Trips" }
                        NavLink { to: Route::Board {}, label: "Board" }
                        NavLink { to: Route::Chat {}, label: "Chat" }
                        NavLink { to: Route::Profile {}, label: "Profile" }
                    }
                }

                button {
                    class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                    onclick: handle_logout,
                    "Sign out"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-sky-100 text-sky-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
