//! Marketplace feed page.

use leptos::prelude::*;

use crate::components::post_card::PostCard;

/// Feed page — fetches the post list on mount and renders one card per
/// post. A failed fetch shows the empty state.
#[component]
pub fn FeedPage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_posts());

    view! {
        <div class="feed-page">
            <h1>"Marketplace feed"</h1>
            <Suspense fallback=move || view! { <p>"Loading the feed..."</p> }>
                {move || {
                    posts.get().map(|list| match list {
                        Some(posts) if !posts.is_empty() => {
                            posts
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                        _ => view! { <p class="feed-page__empty">"Nothing to show yet."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
