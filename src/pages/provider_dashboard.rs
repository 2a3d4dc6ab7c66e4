//! Provider dashboard shell.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::{PROVIDER_LINKS, Sidebar, pane_label};
use crate::state::auth::{self, AuthState};

/// Provider dashboard: sidebar navigation shell keyed by the active-tab
/// string.
#[component]
pub fn ProviderDashboardPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    auth::install_unauth_redirect(auth_state, navigate);

    let active_tab = RwSignal::new("overview".to_owned());

    view! {
        <div class="dashboard dashboard--provider">
            <Sidebar links=PROVIDER_LINKS active_tab=active_tab/>
            <main class="dashboard__pane">
                <h1>{move || pane_label(PROVIDER_LINKS, &active_tab.get())}</h1>
            </main>
        </div>
    }
}
