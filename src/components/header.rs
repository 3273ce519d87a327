//! Top banner with the signed-in user's email.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Header bar — shows the app name and whoever the last decoded claims say
/// is signed in. Renders an empty slot when identity has been cleared.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="header">
            <span class="header__brand">"Recipeboard"</span>
            <span class="header__spacer"></span>
            <span class="header__user">{move || auth.get().email().to_owned()}</span>
        </header>
    }
}
