//! Trip card component

use dioxus::prelude::*;
use waypoint_api::types::Trip;

use crate::routes::Route;

/// Props for TripCard
#[derive(Props, Clone, PartialEq)]
pub struct TripCardProps {
    pub trip: Trip,
}

/// Card for a single trip in the trips list
#[component]
pub fn TripCard(props: TripCardProps) -> Element {
    let trip = &props.trip;
    let nights = (trip.end_date - trip.start_date).num_days();

    rsx! {
        Link {
            to: Route::TripDetail { id: trip.id.to_string() },
            class: "block rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200",

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-1",
                "{trip.title}"
            }
            p {
                class: "text-sm font-medium text-gray-600 mb-2",
                "{trip.destination}"
            }
            div {
                class: "flex items-center gap-2 text-sm text-gray-500",
                span { "{trip.start_date} \u{2013} {trip.end_date}" }
                span { class: "bg-gray-100 px-2 py-0.5 rounded text-xs", "{nights} nights" }
            }
        }
    }
}
