//! Entry page shown to unauthenticated visitors.

use leptos::prelude::*;

/// Static landing screen. Sign-in happens on the hosted identity provider's
/// own pages; once its SDK has written the credential-store keys, the
/// dashboard route picks the session up.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Recipeboard"</h1>
            <p>"Your recipe list, synced."</p>
            <a href="/" class="home-page__enter">
                "Open my recipes"
            </a>
        </div>
    }
}
