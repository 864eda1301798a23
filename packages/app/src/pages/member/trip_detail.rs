//! Trip detail page: the generated day-by-day plan

use dioxus::prelude::*;
use uuid::Uuid;
use waypoint_api::types::TripDay;
use waypoint_api::ApiError;

use crate::components::{ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::session::use_session;

/// Day-by-day plan for one trip
#[component]
pub fn TripDetail(id: String) -> Element {
    let session = use_session();
    // Hooks run unconditionally; the id check comes after all of them so
    // the hook order never depends on the prop.
    let parsed_id: Option<Uuid> = id.parse().ok();

    let fetch_session = session.clone();
    let trip = use_resource(move || {
        let session = fetch_session.clone();
        async move {
            let Some(trip_id) = parsed_id else {
                return Err(ApiError::Status {
                    status: 404,
                    message: "unknown trip".to_string(),
                });
            };
            session.observe(session.api().trip(trip_id).await)
        }
    });

    if parsed_id.is_none() {
        return rsx! {
            ErrorNotice { message: "Unknown trip" }
        };
    }

    rsx! {
        div {
            Link {
                to: Route::Trips {},
                class: "text-sm text-sky-700 hover:underline",
                "\u{2190} All trips"
            }

            match &*trip.read() {
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
                Some(Err(e)) => rsx! {
                    div { class: "mt-4", ErrorNotice { message: "Couldn't load this trip: {e}" } }
                },
                Some(Ok(trip)) => rsx! {
                    div {
                        class: "mt-4",
                        h1 { class: "text-2xl font-bold text-gray-900", "{trip.title}" }
                        p { class: "text-gray-600 mb-6", "{trip.destination} \u{00b7} {trip.start_date} \u{2013} {trip.end_date}" }

                        if trip.days.is_empty() {
                            p { class: "text-gray-500", "This trip has no plan yet." }
                        }

                        for day in trip.days.clone() {
                            DayCard { key: "{day.date}", day }
                        }
                    }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DayCardProps {
    day: TripDay,
}

/// One day of the plan with its ordered stops
#[component]
fn DayCard(props: DayCardProps) -> Element {
    let heading = props.day.date.format("%A, %b %e").to_string();

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-5 mb-4",
            h2 { class: "text-lg font-semibold text-gray-900 mb-3", "{heading}" }
            for stop in props.day.stops.clone() {
                div {
                    class: "flex items-baseline gap-3 py-1.5 border-t border-gray-100 first:border-t-0",
                    if let Some(time) = &stop.time {
                        span { class: "text-sm text-gray-500 w-14 shrink-0", "{time}" }
                    }
                    div {
                        p { class: "text-sm font-medium text-gray-900", "{stop.name}" }
                        if let Some(notes) = &stop.notes {
                            p { class: "text-sm text-gray-600", "{notes}" }
                        }
                    }
                }
            }
        }
    }
}
