//! Multi-field "become a provider" form with dynamic domain rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the server upgrades the caller's role, so the submit flow
//! re-fetches the profile, pushes it into the shared auth state, holds the
//! success message on screen briefly, then resets the fields and navigates
//! to the dashboard matching the refreshed role. On failure the fields are
//! left untouched so the user can correct and resubmit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::provider_form::{
    DomainRows, EXPERTISE_LEVELS, FormStatus, GENERIC_FAILURE_MESSAGE, SUCCESS_REDIRECT_DELAY_MS,
    build_request,
};

/// Provider onboarding form. Submits one creation request for the current
/// session user.
#[component]
pub fn ProviderForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let description = RwSignal::new(String::new());
    let disponibilite = RwSignal::new(String::new());
    let tarif_horaire = RwSignal::new(String::new());
    let order = RwSignal::new(String::new());
    let rows = RwSignal::new(DomainRows::default());
    let status = RwSignal::new(FormStatus::Idle);

    // Catalog fetch happens once, when the form mounts.
    let domains = LocalResource::new(|| crate::net::api::fetch_domains());

    let on_submit = move |_| {
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }
        let order_value = order.get_untracked().trim().parse::<i64>().unwrap_or(0);
        let request = match build_request(
            &description.get_untracked(),
            &disponibilite.get_untracked(),
            &tarif_horaire.get_untracked(),
            order_value,
            &rows.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                status.set(FormStatus::Failed(message.to_owned()));
                return;
            }
        };
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        status.set(FormStatus::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_provider(&user.id, &request).await {
                    Ok(_) => {
                        status.set(FormStatus::Success);
                        // Pick up the server-side role change.
                        if let Some(profile) = crate::net::api::fetch_profile().await {
                            auth::update_user(auth, profile);
                        }
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            SUCCESS_REDIRECT_DELAY_MS,
                        )))
                        .await;
                        description.set(String::new());
                        disponibilite.set(String::new());
                        tarif_horaire.set(String::new());
                        order.set(String::new());
                        rows.update(DomainRows::reset);
                        status.set(FormStatus::Idle);
                        let role = auth.get_untracked().role().to_owned();
                        navigate(auth::dashboard_path(&role), NavigateOptions::default());
                    }
                    Err(e) => {
                        let message = match e {
                            crate::net::api::ApiError::Server(message) => message,
                            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
                        };
                        status.set(FormStatus::Failed(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request, user);
        }
    };

    let status_view = move || match status.get() {
        FormStatus::Idle => None,
        FormStatus::Submitting => {
            Some(view! { <p class="provider-form__status">"Submitting..."</p> }.into_any())
        }
        FormStatus::Success => Some(
            view! { <p class="provider-form__status provider-form__status--success">"Your provider profile was created!"</p> }
                .into_any(),
        ),
        FormStatus::Failed(message) => Some(
            view! { <p class="provider-form__status provider-form__status--error">{message}</p> }.into_any(),
        ),
    };

    view! {
        <form class="provider-form" on:submit=move |ev| ev.prevent_default()>
            <h2>"Become a provider"</h2>

            <label class="provider-form__label">
                "Describe your services"
                <textarea
                    class="provider-form__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="provider-form__label">
                "Availability"
                <input
                    class="provider-form__input"
                    type="text"
                    placeholder="e.g. weekdays 9:00-17:00"
                    prop:value=move || disponibilite.get()
                    on:input=move |ev| disponibilite.set(event_target_value(&ev))
                />
            </label>

            <label class="provider-form__label">
                "Hourly rate"
                <input
                    class="provider-form__input"
                    type="number"
                    min="0"
                    prop:value=move || tarif_horaire.get()
                    on:input=move |ev| tarif_horaire.set(event_target_value(&ev))
                />
            </label>

            <label class="provider-form__label">
                "Listing position"
                <input
                    class="provider-form__input"
                    type="number"
                    min="0"
                    prop:value=move || order.get()
                    on:input=move |ev| order.set(event_target_value(&ev))
                />
            </label>

            <fieldset class="provider-form__domains">
                <legend>"Service domains"</legend>
                {move || {
                    let catalog = domains.get().unwrap_or_default();
                    let row_count = rows.get().len();
                    (0..row_count)
                        .map(|index| {
                            let row = rows.get().rows()[index].clone();
                            let catalog = catalog.clone();
                            view! {
                                <div class="provider-form__domain-row">
                                    <select
                                        class="provider-form__select"
                                        prop:value=row.domain_id.clone()
                                        on:change=move |ev| {
                                            rows.update(|r| r.set_domain(index, event_target_value(&ev)));
                                        }
                                    >
                                        <option value="">"Choose a domain"</option>
                                        {catalog
                                            .iter()
                                            .map(|d| {
                                                let id = d.id.clone();
                                                let name = d.name.clone();
                                                view! { <option value=id>{name}</option> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <select
                                        class="provider-form__select"
                                        prop:value=row.expertise.clone()
                                        on:change=move |ev| {
                                            rows.update(|r| r.set_expertise(index, event_target_value(&ev)));
                                        }
                                    >
                                        <option value="">"Expertise level"</option>
                                        {EXPERTISE_LEVELS
                                            .iter()
                                            .map(|level| view! { <option value=*level>{*level}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <Show when=move || rows.get().can_remove()>
                                        <button
                                            class="btn provider-form__remove-row"
                                            on:click=move |_| {
                                                rows.update(|r| {
                                                    r.remove_row(index);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="btn provider-form__add-row" on:click=move |_| rows.update(DomainRows::push_row)>
                    "+ Add a domain"
                </button>
            </fieldset>

            {status_view}

            <button class="btn btn--primary" on:click=on_submit>
                "Create my provider profile"
            </button>
        </form>
    }
}
