//! Phone verification page

use dioxus::prelude::*;

use crate::session::use_session;

/// Phone verification page
///
/// Reached when the account still has an outstanding phone-verification
/// requirement; the route guard pins the user here until it clears.
#[component]
pub fn VerifyPhone() -> Element {
    let session = use_session();

    let mut code = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        let session = session.clone();
        let code_value = code().trim().to_string();

        if code_value.is_empty() {
            error.set(Some("Please enter the verification code".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match session.observe(session.api().verify_phone(code_value).await) {
                // The guard leaves this screen once the flag clears.
                Ok(()) => session.phone_verified(),
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
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Verify your phone" }
                    p { class: "text-gray-600 text-sm", "Enter the code we sent to your phone number" }
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
                        input {
                            r#type: "text",
                            value: "{code}",
                            oninput: move |e| code.set(e.value()),
                            placeholder: "6-digit code",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md text-center tracking-widest focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Verifying..." } else { "Verify" }
                    }
                }
            }
        }
    }
}
