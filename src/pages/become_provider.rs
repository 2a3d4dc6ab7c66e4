//! "Become a provider" page hosting the onboarding form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::provider_form::ProviderForm;
use crate::state::auth::{self, AuthState};

/// Onboarding page. Visitors without a session are sent to `/login`.
#[component]
pub fn BecomeProviderPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    auth::install_unauth_redirect(auth_state, navigate);

    view! {
        <div class="become-provider-page">
            <ProviderForm/>
        </div>
    }
}
