//! Community board page

use dioxus::prelude::*;
use waypoint_api::types::NewBoardPost;

use crate::components::{ErrorNotice, LoadingSpinner, PostCard};
use crate::session::use_session;

/// Community board: post list with substring search and a new-post form
#[component]
pub fn Board() -> Element {
    let session = use_session();

    let fetch_session = session.clone();
    let mut posts = use_resource(move || {
        let session = fetch_session.clone();
        async move { session.observe(session.api().list_posts().await) }
    });

    let mut search_query = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Client-side substring filter over title, body, and author.
    let filtered_posts = use_memo(move || {
        let all = match posts.read().as_ref() {
            Some(Ok(p)) => p.clone(),
            _ => vec![],
        };
        let query = search_query().to_lowercase();
        if query.is_empty() {
            return all;
        }
        all.into_iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&query)
                    || post.body.to_lowercase().contains(&query)
                    || post.author_name.to_lowercase().contains(&query)
            })
            .collect()
    });

    let handle_post = move |_| {
        let session = session.clone();
        let title_value = title().trim().to_string();
        let body_value = body().trim().to_string();

        if title_value.is_empty() || body_value.is_empty() {
            error.set(Some("A post needs a title and some text".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let new_post = NewBoardPost {
                title: title_value,
                body: body_value,
            };
            match session.observe(session.api().create_post(new_post).await) {
                Ok(_) => {
                    title.set(String::new());
                    body.set(String::new());
                    posts.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    let is_loading = posts.read().is_none();
    let load_error = matches!(posts.read().as_ref(), Some(Err(_)));

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Community board" }

            // New post
            div {
                class: "bg-white rounded-lg border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Share something" }

                if let Some(err) = error() {
                    div { class: "mb-4", ErrorNotice { message: err } }
                }

                form {
                    onsubmit: handle_post,
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                        placeholder: "Title",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-3 focus:outline-none focus:ring-2 focus:ring-sky-500",
                        disabled: is_pending()
                    }
                    textarea {
                        value: "{body}",
                        oninput: move |e| body.set(e.value()),
                        placeholder: "Tips, questions, finds...",
                        rows: 3,
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-3 focus:outline-none focus:ring-2 focus:ring-sky-500",
                        disabled: is_pending()
                    }
                    button {
                        r#type: "submit",
                        class: "bg-sky-700 text-white py-2 px-6 rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Posting..." } else { "Post" }
                    }
                }
            }

            // Search
            input {
                r#type: "text",
                value: "{search_query}",
                oninput: move |e| search_query.set(e.value()),
                placeholder: "Search posts...",
                class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-6 focus:outline-none focus:ring-2 focus:ring-sky-500"
            }

            if is_loading {
                div { class: "py-12", LoadingSpinner {} }
            } else if load_error {
                ErrorNotice { message: "Couldn't load the board right now" }
            } else if filtered_posts().is_empty() {
                p { class: "text-gray-500 text-center py-12", "Nothing here yet." }
            } else {
                div {
                    class: "grid grid-cols-1 gap-4",
                    for post in filtered_posts() {
                        PostCard { key: "{post.id}", post }
                    }
                }
            }
        }
    }
}
