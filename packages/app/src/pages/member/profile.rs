//! Profile page

use dioxus::prelude::*;
use waypoint_api::types::UpdateProfile;

use crate::components::{ErrorNotice, LoadingSpinner};
use crate::session::use_session;

/// The current user's profile, with display name and bio editing
#[component]
pub fn Profile() -> Element {
    let session = use_session();

    let fetch_session = session.clone();
    let mut profile = use_resource(move || {
        let session = fetch_session.clone();
        async move { session.observe(session.api().current_user().await) }
    });

    let mut display_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut seeded = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);
    let mut is_pending = use_signal(|| false);

    // Seed the form once from the loaded profile.
    use_effect(move || {
        if seeded() {
            return;
        }
        if let Some(Ok(loaded)) = profile.read().as_ref() {
            display_name.set(loaded.display_name.clone());
            bio.set(loaded.bio.clone().unwrap_or_default());
            seeded.set(true);
        }
    });

    let handle_save = move |_| {
        let session = session.clone();
        let name_value = display_name().trim().to_string();
        let bio_value = bio().trim().to_string();

        if name_value.is_empty() {
            error.set(Some("Display name can't be empty".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);
            saved.set(false);

            let update = UpdateProfile {
                display_name: name_value,
                bio: if bio_value.is_empty() { None } else { Some(bio_value) },
            };
            match session.observe(session.api().update_profile(update).await) {
                Ok(_) => {
                    saved.set(true);
                    profile.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Profile" }

            match &*profile.read() {
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
                Some(Err(e)) => rsx! {
                    ErrorNotice { message: "Couldn't load your profile: {e}" }
                },
                Some(Ok(loaded)) => rsx! {
                    div {
                        class: "bg-white rounded-lg border border-gray-200 p-6 max-w-xl",

                        div {
                            class: "mb-6 text-sm text-gray-500 space-y-1",
                            if let Some(email) = &loaded.email {
                                p { "Email: {email}" }
                            }
                            if let Some(phone) = &loaded.phone {
                                p { "Phone: {phone}" }
                            }
                        }

                        if let Some(err) = error() {
                            div { class: "mb-4", ErrorNotice { message: err } }
                        }
                        if saved() {
                            div {
                                class: "mb-4 p-3 bg-green-50 border border-green-200 text-green-800 rounded text-sm",
                                "Profile saved"
                            }
                        }

                        form {
                            onsubmit: handle_save,
                            div {
                                class: "mb-4",
                                label { class: "block text-sm font-medium text-gray-700 mb-2", "Display name" }
                                input {
                                    r#type: "text",
                                    value: "{display_name}",
                                    oninput: move |e| display_name.set(e.value()),
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                                    disabled: is_pending()
                                }
                            }
                            div {
                                class: "mb-4",
                                label { class: "block text-sm font-medium text-gray-700 mb-2", "Bio" }
                                textarea {
                                    value: "{bio}",
                                    oninput: move |e| bio.set(e.value()),
                                    rows: 3,
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                                    disabled: is_pending()
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "bg-sky-700 text-white py-2 px-6 rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_pending(),
                                if is_pending() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                },
            }
        }
    }
}
