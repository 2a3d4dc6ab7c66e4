//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, become_provider::BecomeProviderPage, feed::FeedPage,
    landing::LandingPage, login::LoginPage, provider_dashboard::ProviderDashboardPage,
    user_dashboard::UserDashboardPage,
};
use crate::state::auth::{self, AuthState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, hydrates the persisted session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState {
        user: None,
        token: None,
        loading: true,
    });
    provide_context(auth_state);

    // One-time session hydrate from localStorage.
    Effect::new(move || auth::hydrate_session(auth_state));

    view! {
        <Stylesheet id="leptos" href="/pkg/prestalink.css"/>
        <Title text="Prestalink"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("feed") view=FeedPage/>
                <Route path=StaticSegment("become-provider") view=BecomeProviderPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminDashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("provider"))
                    view=ProviderDashboardPage
                />
                <Route path=(StaticSegment("dashboard"), StaticSegment("user")) view=UserDashboardPage/>
            </Routes>
        </Router>
    }
}
