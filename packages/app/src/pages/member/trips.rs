//! Trips page: the user's trips plus plan generation

use chrono::NaiveDate;
use dioxus::prelude::*;
use waypoint_api::types::GeneratePlanRequest;

use crate::components::{ErrorNotice, LoadingSpinner, TripCard};
use crate::routes::Route;
use crate::session::use_session;

/// Trips overview with a plan-generation form
#[component]
pub fn Trips() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let fetch_session = session.clone();
    let trips = use_resource(move || {
        let session = fetch_session.clone();
        async move { session.observe(session.api().list_trips().await) }
    });

    let mut destination = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_generate = move |_| {
        let session = session.clone();
        let destination_value = destination().trim().to_string();

        let dates = (
            NaiveDate::parse_from_str(&start_date(), "%Y-%m-%d"),
            NaiveDate::parse_from_str(&end_date(), "%Y-%m-%d"),
        );
        let (Ok(start), Ok(end)) = dates else {
            error.set(Some("Please pick a start and end date".to_string()));
            return;
        };
        if destination_value.is_empty() {
            error.set(Some("Please enter a destination".to_string()));
            return;
        }
        if end < start {
            error.set(Some("The trip can't end before it starts".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let request = GeneratePlanRequest {
                destination: destination_value,
                start_date: start,
                end_date: end,
                interests: Vec::new(),
            };
            match session.observe(session.api().generate_plan(request).await) {
                Ok(trip) => {
                    navigator.push(Route::TripDetail {
                        id: trip.id.to_string(),
                    });
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Your trips" }

            // Plan generation
            div {
                class: "bg-white rounded-lg border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Plan a new trip" }

                if let Some(err) = error() {
                    div { class: "mb-4", ErrorNotice { message: err } }
                }

                form {
                    onsubmit: handle_generate,
                    class: "grid grid-cols-1 md:grid-cols-4 gap-4 items-end",
                    div {
                        class: "md:col-span-2",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Destination" }
                        input {
                            r#type: "text",
                            value: "{destination}",
                            oninput: move |e| destination.set(e.value()),
                            placeholder: "Lisbon, Kyoto, Oaxaca...",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "From" }
                        input {
                            r#type: "date",
                            value: "{start_date}",
                            oninput: move |e| start_date.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "To" }
                        input {
                            r#type: "date",
                            value: "{end_date}",
                            oninput: move |e| end_date.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "md:col-span-4 bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Generating plan..." } else { "Generate plan" }
                    }
                }
            }

            // Trip list
            match &*trips.read() {
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
                Some(Err(e)) => rsx! {
                    ErrorNotice { message: "Couldn't load your trips: {e}" }
                },
                Some(Ok(trips)) if trips.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No trips yet. Plan your first one above." }
                },
                Some(Ok(trips)) => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        for trip in trips.clone() {
                            TripCard { key: "{trip.id}", trip }
                        }
                    }
                },
            }
        }
    }
}
