//! Login page

use dioxus::prelude::*;

use crate::session::use_session;

/// Login page
///
/// On success the session state changes and the route guard moves the user
/// on; this page never navigates itself. Social sign-in goes through the
/// backend redirect flow and comes back as a deep-link credential hand-off.
#[component]
pub fn Login() -> Element {
    let session = use_session();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Adopt a deep-link credential when the social flow just redirected back.
    let handoff_session = session.clone();
    use_effect(move || {
        let session = handoff_session.clone();
        spawn(async move {
            session.check_status().await;
        });
    });

    let handle_submit = move |_| {
        let session = session.clone();
        let email_value = email().trim().to_string();
        let password_value = password();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match session.api().login(email_value, password_value).await {
                Ok(credential) => session.login(&credential),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign in" }
                    p { class: "text-gray-600 text-sm", "Waypoint" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@example.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign in" }
                    }
                }

                div {
                    class: "mt-6 pt-6 border-t border-gray-200",
                    a {
                        href: "/api/auth/google",
                        class: "block w-full text-center bg-stone-100 text-stone-700 py-2 px-4 rounded-md hover:bg-stone-200",
                        "Continue with Google"
                    }
                }
            }
        }
    }
}
