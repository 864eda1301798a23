//! Board post card component

use dioxus::prelude::*;
use waypoint_api::types::BoardPost;

/// Props for PostCard
#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: BoardPost,
}

/// Card for a single community board post
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;
    let posted = post.created_at.format("%b %e, %Y");

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200",

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2",
                "{post.title}"
            }
            p {
                class: "text-sm text-gray-700 mb-3 line-clamp-3",
                "{post.body}"
            }
            div {
                class: "flex items-center justify-between text-sm text-gray-500",
                span { "{post.author_name}" }
                div {
                    class: "flex items-center gap-3",
                    span { "{posted}" }
                    if post.comment_count > 0 {
                        span {
                            class: "bg-gray-100 px-2 py-0.5 rounded text-xs",
                            "{post.comment_count} comments"
                        }
                    }
                }
            }
        }
    }
}
