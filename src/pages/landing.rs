//! Public landing page.

use leptos::prelude::*;

/// Marketing landing page with entry points into the app.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1>"Find the right provider, right around the corner"</h1>
                <p>"Prestalink connects you with trusted local service providers."</p>
                <div class="landing-page__cta">
                    <a class="btn btn--primary" href="/feed">
                        "Browse the feed"
                    </a>
                    <a class="btn" href="/become-provider">
                        "Offer your services"
                    </a>
                </div>
            </section>
        </div>
    }
}
