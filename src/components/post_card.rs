//! Feed post card: likes, comments, replies, reporting, and the image
//! lightbox for one post.
//!
//! ARCHITECTURE
//! ============
//! All transition rules live in `state::post`; this component wraps one
//! `PostInteraction` in an `RwSignal`, renders it, and maps request
//! outcomes back onto it. Every remote call is fired once from the click
//! handler via `spawn_local`; failures are absorbed here (rollback, empty
//! panel, modal notice) and never propagate past the card.

use leptos::prelude::*;

use crate::components::review_form::ReviewDialog;
use crate::net::types::{Comment, Post, Reply};
use crate::state::auth::AuthState;
use crate::state::post::{
    CommentsPanel, Lightbox, PostInteraction, ReportModal, ReportOutcome, hidden_thumbnails,
    resolve_report, submittable, visible_thumbnails,
};
use crate::util::text;
use crate::util::time;

/// One post in the marketplace feed with its full interaction surface.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let post_id = StoredValue::new(post.id.clone());
    let images = StoredValue::new(post.images.clone());
    let image_count = post.images.len();
    let author_id = post.author.id.clone();
    let author_name = post.author.name.clone();
    let author_avatar = post.author.avatar_url.clone();
    let content = StoredValue::new(post.content.clone());
    let created_at = post.created_at;

    let interaction = RwSignal::new(PostInteraction::from_post(&post));
    let comment_input = RwSignal::new(String::new());
    let reply_input = RwSignal::new(String::new());
    let report_modal = RwSignal::new(ReportModal::default());
    let report_reason = RwSignal::new(String::new());
    let report_notice = RwSignal::new(None::<&'static str>);
    let lightbox = RwSignal::new(Lightbox::default());
    let show_full_content = RwSignal::new(false);
    let show_review = RwSignal::new(false);

    // Like: optimistic flip, exact rollback on failure, no user-visible error.
    let on_like = move |_| {
        let Some(snapshot) = interaction.try_update(PostInteraction::toggle_like) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                if crate::net::api::toggle_like(&id).await.is_err() {
                    interaction.update(|p| p.rollback_like(snapshot));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
        }
    };

    // Comments panel: the first expansion starts the one-time fetch.
    let on_toggle_comments = move |_| {
        let fetch = interaction
            .try_update(PostInteraction::toggle_comments)
            .unwrap_or(false);
        if !fetch {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                match crate::net::api::fetch_comments(&id).await {
                    Some(comments) => interaction.update(|p| p.comments_loaded(comments)),
                    None => {
                        leptos::logging::warn!("comments fetch failed for post {id}");
                        interaction.update(|p| p.comments_failed());
                    }
                }
            });
        }
    };

    let submit_comment = move || {
        let content = comment_input.get_untracked();
        if !submittable(&content) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                match crate::net::api::create_comment(&id, content.trim()).await {
                    Ok(comment) => {
                        interaction.update(|p| p.insert_comment(comment));
                        comment_input.set(String::new());
                    }
                    // Input is preserved; the user can resend.
                    Err(e) => leptos::logging::warn!("comment create failed: {e}"),
                }
            });
        }
    };

    let submit_report = move || {
        let reason = report_reason.get_untracked();
        if !submittable(&reason) {
            return;
        }
        report_modal.set(ReportModal::Submitting);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                let outcome = match crate::net::api::report_post(&id, reason.trim()).await {
                    Ok(()) => ReportOutcome::Accepted,
                    Err(e) if e.is_conflict() => ReportOutcome::Duplicate,
                    Err(_) => ReportOutcome::Failed,
                };
                let (modal, message) = resolve_report(outcome);
                report_modal.set(modal);
                report_notice.set(Some(message));
                if modal == ReportModal::Closed {
                    report_reason.set(String::new());
                }
            });
        }
    };

    let on_open_report = move |_| {
        report_notice.set(None);
        report_modal.set(ReportModal::Open);
    };

    let display_content = move || {
        let full = content.get_value();
        if show_full_content.get() || !text::needs_truncation(&full) {
            full
        } else {
            text::truncated(&full)
        }
    };

    let comment_placeholder = move || {
        let name = auth
            .get()
            .user
            .map_or_else(|| "you".to_owned(), |u| u.name);
        format!("Comment as {name}...")
    };

    let like_label = move || {
        let state = interaction.get();
        format!("{} {}", if state.liked { "♥" } else { "♡" }, state.like_count)
    };

    let comments_label = move || format!("💬 {}", interaction.get().comment_count);

    view! {
        <article class="post-card">
            <header class="post-card__header">
                {author_avatar
                    .map(|url| view! { <img class="post-card__avatar" src=url alt=author_name.clone()/> })}
                <div class="post-card__byline">
                    <span class="post-card__author">{author_name.clone()}</span>
                    <span class="post-card__time">
                        {move || time::relative_time(created_at, time::now_ms())}
                    </span>
                </div>
            </header>

            <p class="post-card__content">{display_content}</p>
            <Show when=move || text::needs_truncation(&content.get_value())>
                <button
                    class="post-card__see-more"
                    on:click=move |_| show_full_content.update(|v| *v = !*v)
                >
                    {move || if show_full_content.get() { "See less" } else { "See more" }}
                </button>
            </Show>

            <Show when=move || (image_count > 0)>
                <ThumbnailStrip images=images lightbox=lightbox/>
            </Show>

            <div class="post-card__actions">
                <button class="post-card__action" on:click=on_like>
                    {like_label}
                </button>
                <button class="post-card__action" on:click=on_toggle_comments>
                    {comments_label}
                </button>
                <button class="post-card__action" on:click=move |_| show_review.set(true)>
                    "Rate"
                </button>
                <button class="post-card__action" on:click=on_open_report>
                    "Report"
                </button>
            </div>

            <Show when=move || report_modal.get() == ReportModal::Closed>
                {move || report_notice.get().map(|msg| view! { <p class="post-card__notice">{msg}</p> })}
            </Show>

            <Show when=move || interaction.get().panel != CommentsPanel::Collapsed>
                <section class="post-card__comments">
                    {move || {
                        let state = interaction.get();
                        if state.panel == CommentsPanel::Loading {
                            return view! { <p class="post-card__comments-empty">"Loading comments..."</p> }
                                .into_any();
                        }
                        let comments = state.comments;
                        if comments.is_empty() {
                            return view! { <p class="post-card__comments-empty">"No comments yet"</p> }
                                .into_any();
                        }
                        comments
                            .into_iter()
                            .map(|comment| {
                                view! {
                                    <CommentNode
                                        comment=comment
                                        interaction=interaction
                                        reply_input=reply_input
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}

                    <div class="post-card__comment-row">
                        <input
                            class="post-card__comment-input"
                            type="text"
                            placeholder=comment_placeholder
                            prop:value=move || comment_input.get()
                            on:input=move |ev| comment_input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit_comment();
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            on:click=move |_| submit_comment()
                            disabled=move || !submittable(&comment_input.get())
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </Show>

            <Show when=move || report_modal.get() != ReportModal::Closed>
                <ReportDialog
                    modal=report_modal
                    reason=report_reason
                    notice=report_notice
                    on_submit=Callback::new(move |()| submit_report())
                />
            </Show>

            <Show when=move || show_review.get()>
                <ReviewDialog
                    provider_id=author_id.clone()
                    on_close=Callback::new(move |()| show_review.set(false))
                />
            </Show>

            <Show when=move || lightbox.get().is_open()>
                <LightboxOverlay images=images lightbox=lightbox/>
            </Show>
        </article>
    }
}

/// One comment with its replies and the (single-target) reply input.
#[component]
fn CommentNode(
    comment: Comment,
    interaction: RwSignal<PostInteraction>,
    reply_input: RwSignal<String>,
) -> impl IntoView {
    let comment_id = StoredValue::new(comment.id.clone());
    let author_name = comment.author.name.clone();

    let is_target = move || interaction.get().is_reply_target(&comment_id.get_value());

    let on_toggle_reply = move |_| {
        reply_input.set(String::new());
        interaction.update(|p| p.toggle_reply(&comment_id.get_value()));
    };

    let submit_reply = move || {
        let content = reply_input.get_untracked();
        if !submittable(&content) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = comment_id.get_value();
                match crate::net::api::create_reply(&id, content.trim()).await {
                    Ok(reply) => {
                        interaction.update(|p| {
                            p.append_reply(reply);
                            p.close_reply();
                        });
                        reply_input.set(String::new());
                    }
                    Err(e) => leptos::logging::warn!("reply create failed: {e}"),
                }
            });
        }
    };

    // Replies live inside the interaction signal so in-place appends render.
    let replies = move || {
        interaction
            .get()
            .comments
            .iter()
            .find(|c| c.id == comment_id.get_value())
            .map(|c| c.replies.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="comment">
            <div class="comment__body">
                <span class="comment__author">{author_name}</span>
                <span class="comment__text">{comment.content.clone()}</span>
            </div>
            <button class="comment__reply-toggle" on:click=on_toggle_reply>
                {move || if is_target() { "Cancel" } else { "Reply" }}
            </button>

            {move || {
                replies()
                    .into_iter()
                    .map(|reply| view! { <ReplyNode reply=reply/> })
                    .collect::<Vec<_>>()
            }}

            <Show when=is_target>
                <div class="comment__reply-row">
                    <input
                        class="comment__reply-input"
                        type="text"
                        placeholder="Write a reply..."
                        prop:value=move || reply_input.get()
                        on:input=move |ev| reply_input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_reply();
                            }
                        }
                    />
                    <button
                        class="btn"
                        on:click=move |_| submit_reply()
                        disabled=move || !submittable(&reply_input.get())
                    >
                        "Reply"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReplyNode(reply: Reply) -> impl IntoView {
    view! {
        <div class="comment comment--reply">
            <span class="comment__author">{reply.author.name.clone()}</span>
            <span class="comment__text">{reply.content.clone()}</span>
        </div>
    }
}

/// Thumbnail strip: at most four inline, the last overlaid with "+N" when
/// more exist. Every thumbnail opens the lightbox at its own index.
#[component]
fn ThumbnailStrip(images: StoredValue<Vec<String>>, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let list = images.get_value();
    let total = list.len();
    let visible = visible_thumbnails(total);
    let hidden = hidden_thumbnails(total);

    view! {
        <div class="post-card__images">
            {list
                .into_iter()
                .take(visible)
                .enumerate()
                .map(|(index, src)| {
                    let is_overflow_slot = hidden > 0 && index == visible - 1;
                    view! {
                        <button
                            class="post-card__thumb"
                            on:click=move |_| lightbox.update(|l| l.open(index, total))
                        >
                            <img src=src alt=format!("attachment {}", index + 1)/>
                            <Show when=move || is_overflow_slot>
                                <span class="post-card__thumb-more">{format!("+{hidden}")}</span>
                            </Show>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Full-screen image viewer with circular navigation.
#[component]
fn LightboxOverlay(images: StoredValue<Vec<String>>, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let total = images.get_value().len();

    let current_src = move || {
        lightbox
            .get()
            .index()
            .and_then(|i| images.get_value().get(i).cloned())
            .unwrap_or_default()
    };

    let counter = move || {
        lightbox
            .get()
            .index()
            .map_or_else(String::new, |i| format!("{} / {}", i + 1, total))
    };

    view! {
        <div class="lightbox" on:click=move |_| lightbox.update(Lightbox::close)>
            <div class="lightbox__stage" on:click=move |ev| ev.stop_propagation()>
                <button class="lightbox__nav" on:click=move |_| lightbox.update(|l| l.prev(total))>
                    "‹"
                </button>
                <img class="lightbox__image" src=current_src alt="attachment"/>
                <button class="lightbox__nav" on:click=move |_| lightbox.update(|l| l.next(total))>
                    "›"
                </button>
            </div>
            <span class="lightbox__counter">{counter}</span>
            <button class="lightbox__close" on:click=move |_| lightbox.update(Lightbox::close)>
                "✕"
            </button>
        </div>
    }
}

/// Report modal: open → submitting → closed on success/duplicate, back to
/// open with the generic notice on any other failure.
#[component]
fn ReportDialog(
    modal: RwSignal<ReportModal>,
    reason: RwSignal<String>,
    notice: RwSignal<Option<&'static str>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submitting = move || modal.get() == ReportModal::Submitting;
    let on_cancel = move |_| {
        modal.set(ReportModal::Closed);
        reason.set(String::new());
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Report this post"</h2>
                <label class="dialog__label">
                    "Reason"
                    <textarea
                        class="dialog__input"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                        disabled=submitting
                    ></textarea>
                </label>

                {move || notice.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}

                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel disabled=submitting>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_submit.run(())
                        disabled=move || submitting() || !submittable(&reason.get())
                    >
                        {move || if submitting() { "Sending..." } else { "Send report" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
