//! Login page: credentials in, persisted session out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Email/password login form. A successful login persists the session and
/// lands on the dashboard matching the user's role.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Enter your email and password."));
            return;
        }
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(resp) => {
                        let role = resp.user.role.clone();
                        auth::establish(auth_state, resp.token, resp.user);
                        navigate(auth::dashboard_path(&role), NavigateOptions::default());
                    }
                    Err(_) => {
                        error.set(Some("Invalid email or password."));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Prestalink"</h1>
            <form class="login-page__form" on:submit=move |ev| ev.prevent_default()>
                <label class="login-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="login-page__error">{msg}</p> })}

                <button
                    class="btn btn--primary"
                    on:click=move |_| submit.run(())
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
