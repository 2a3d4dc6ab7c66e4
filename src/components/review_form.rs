//! Provider review dialog (1-5 rating plus comment).

#[cfg(test)]
#[path = "review_form_test.rs"]
mod review_form_test;

use leptos::prelude::*;

/// Lowest accepted rating.
pub const MIN_NOTE: u8 = 1;
/// Highest accepted rating.
pub const MAX_NOTE: u8 = 5;

/// Validate a review before submission.
///
/// # Errors
///
/// Returns a user-facing message when the rating is out of range or the
/// comment is blank.
pub fn validate_review(note: u8, comment: &str) -> Result<(), &'static str> {
    if !(MIN_NOTE..=MAX_NOTE).contains(&note) {
        return Err("Choose a rating from 1 to 5.");
    }
    if comment.trim().is_empty() {
        return Err("Write a few words about your experience.");
    }
    Ok(())
}

/// Modal for rating a provider. Failure keeps the fields for a manual
/// retry; success clears them and closes.
#[component]
pub fn ReviewDialog(provider_id: String, on_close: Callback<()>) -> impl IntoView {
    let provider_id = StoredValue::new(provider_id);
    let note = RwSignal::new(MAX_NOTE);
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let submit = move || {
        let chosen_note = note.get_untracked();
        let text = comment.get_untracked();
        if let Err(message) = validate_review(chosen_note, &text) {
            error.set(Some(message));
            return;
        }
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let id = provider_id.get_value();
                match crate::net::api::create_review(&id, chosen_note, text.trim()).await {
                    Ok(()) => {
                        comment.set(String::new());
                        note.set(MAX_NOTE);
                        error.set(None);
                        submitting.set(false);
                        on_close.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("review create failed: {e}");
                        error.set(Some("Could not submit your review. Please try again."));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider_id, text);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Rate this provider"</h2>

                <div class="review__stars">
                    {(MIN_NOTE..=MAX_NOTE)
                        .map(|value| {
                            view! {
                                <button
                                    class="review__star"
                                    class=("review__star--active", move || note.get() >= value)
                                    on:click=move |_| note.set(value)
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <label class="dialog__label">
                    "Your experience"
                    <textarea
                        class="dialog__input"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                    ></textarea>
                </label>

                {move || error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(()) disabled=move || submitting.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| submit()
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Sending..." } else { "Submit review" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
