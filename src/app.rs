//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{dashboard::DashboardPage, home::HomePage};
use crate::state::{auth::AuthState, recipes::RecipesState};

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
/// Provides the build-time config and shared state contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One immutable config value for the whole tree; pages pass it onward
    // explicitly instead of re-reading the environment.
    provide_context(AppConfig::from_build_env());

    let auth = RwSignal::new(AuthState::default());
    let recipes = RwSignal::new(RecipesState::default());
    provide_context(auth);
    provide_context(recipes);

    view! {
        <Stylesheet id="leptos" href="/pkg/recipeboard.css"/>
        <Title text="Recipeboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
