//! Top navigation bar with auth-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Site-wide navigation. Shows login when signed out; the user's name,
/// dashboard link, and sign-out when signed in.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let user_name = move || auth_state.get().user.map(|u| u.name);
    let dashboard_href = move || auth::dashboard_path(auth_state.get().role());

    let on_sign_out = move |_| {
        auth::sign_out(auth_state);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Prestalink"
            </a>
            <nav class="navbar__links">
                <a href="/feed">"Feed"</a>
                <a href="/become-provider">"Become a provider"</a>
                {move || match user_name() {
                    Some(name) => {
                        view! {
                            <a href=dashboard_href()>{name}</a>
                            <button class="navbar__signout" on:click=on_sign_out.clone()>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    }
                    None => view! { <a href="/login">"Log in"</a> }.into_any(),
                }}
            </nav>
        </header>
    }
}
