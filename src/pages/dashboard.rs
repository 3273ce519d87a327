//! Dashboard page: the authenticated recipe list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Identity is re-resolved from
//! credential storage at mount and again at every create/update/delete, so a
//! session ended elsewhere is caught at the next action boundary. Action
//! failures are logged and otherwise silent; the list keeps its
//! last-known-good contents.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::HostedSessionProvider;
use crate::components::header::Header;
use crate::components::recipe_row::RecipeRow;
use crate::config::AppConfig;
use crate::net::types::{RecipeItem, UpdateRecipeBody};
use crate::state::auth::AuthState;
use crate::state::recipes::{PendingAction, RecipesState, SyncPhase};
use crate::sync::actions::{self, IdentityDirective, resolve_directive};
use crate::sync::identity::Identity;
use crate::sync::reduce;

/// Dashboard page — list, creation form, and per-item actions.
/// Redirects to `/home` when no session is present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let recipes = expect_context::<RwSignal<RecipesState>>();
    let navigate = use_navigate();

    let new_title = RwSignal::new(String::new());
    let edit_target = RwSignal::new(None::<RecipeItem>);

    // Mount: resolve identity once, then redirect or start the initial fetch.
    let mounted = RwSignal::new(false);
    let mount_config = config.clone();
    let navigate_mount = navigate.clone();
    Effect::new(move || {
        if mounted.get() {
            return;
        }
        mounted.set(true);
        let Some(identity) = action_identity(&mount_config, auth, recipes, &navigate_mount)
        else {
            return;
        };
        recipes.update(reduce::begin_loading);
        spawn_fetch(&mount_config, recipes, identity);
    });

    let create_config = config.clone();
    let navigate_create = navigate.clone();
    let on_create = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_owned();
        if title.is_empty() {
            return;
        }
        let Some(identity) = action_identity(&create_config, auth, recipes, &navigate_create)
        else {
            return;
        };
        recipes.update(|s| reduce::begin_action(s, PendingAction::Create));
        spawn_create(&create_config, recipes, new_title, identity, title);
    });

    let delete_config = config.clone();
    let navigate_delete = navigate.clone();
    let on_delete = Callback::new(move |sk: String| {
        let Some(identity) = action_identity(&delete_config, auth, recipes, &navigate_delete)
        else {
            return;
        };
        recipes.update(|s| reduce::begin_action(s, PendingAction::Delete));
        spawn_delete(&delete_config, recipes, identity, sk);
    });

    let on_edit = Callback::new(move |item: RecipeItem| edit_target.set(Some(item)));
    let on_edit_cancel = Callback::new(move |_| edit_target.set(None));

    view! {
        <Header/>
        <Show
            when=move || !matches!(recipes.get().phase, SyncPhase::Unauthenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to the entry page..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <h1>"Recipes App"</h1>

                <form class="dashboard-page__form" on:submit=move |ev| on_create.run(ev)>
                    <label class="dashboard-page__label" for="new-item">
                        "New Item:"
                    </label>
                    <input
                        id="new-item"
                        class="dashboard-page__input"
                        type="text"
                        placeholder="Enter Item Title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| new_title.set(event_target_value(&ev))
                    />
                    <small class="dashboard-page__hint">
                        "Add items to your recipe list!"
                    </small>
                    <button type="submit" class="btn btn--primary">
                        "Submit"
                    </button>
                </form>

                <div class="dashboard-page__list">
                    <h3>"Recipe Items:"</h3>
                    <Show
                        when=move || !matches!(recipes.get().phase, SyncPhase::Loading)
                        fallback=move || view! { <p>"Loading recipes..."</p> }
                    >
                        {move || {
                            recipes
                                .get()
                                .items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <RecipeRow
                                            item=item
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>

                <Show when=move || edit_target.get().is_some()>
                    <EditRecipeDialog target=edit_target on_cancel=on_edit_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for editing an item's title and details.
#[component]
fn EditRecipeDialog(
    target: RwSignal<Option<RecipeItem>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let recipes = expect_context::<RwSignal<RecipesState>>();
    let navigate = use_navigate();

    let initial = target.get_untracked();
    let title = RwSignal::new(
        initial
            .as_ref()
            .map(|item| item.recipe_title.clone())
            .unwrap_or_default(),
    );
    let details = RwSignal::new(
        initial
            .as_ref()
            .and_then(|item| item.recipe_details.clone())
            .unwrap_or_default(),
    );

    let submit = Callback::new(move |_| {
        let Some(item) = target.get_untracked() else {
            return;
        };
        let body = UpdateRecipeBody::diff(&item, title.get().trim(), details.get().trim());
        if body.is_empty() {
            on_cancel.run(());
            return;
        }
        let Some(identity) = action_identity(&config, auth, recipes, &navigate) else {
            on_cancel.run(());
            return;
        };
        recipes.update(|s| reduce::begin_action(s, PendingAction::Update));
        spawn_update(&config, recipes, identity, item.sk.clone(), body);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Recipe"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Details"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || details.get()
                        on:input=move |ev| details.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Resolve identity at an action boundary and apply the shared policy:
/// no session redirects to the entry page, a malformed token clears the
/// displayed identity, and a usable one refreshes it.
fn action_identity(
    config: &AppConfig,
    auth: RwSignal<AuthState>,
    recipes: RwSignal<RecipesState>,
    navigate: &impl Fn(&str, NavigateOptions),
) -> Option<Identity> {
    match resolve_directive(&HostedSessionProvider::new(config)) {
        IdentityDirective::RedirectToEntry => {
            recipes.update(reduce::mark_unauthenticated);
            navigate("/home", NavigateOptions::default());
            None
        }
        IdentityDirective::ClearIdentity => {
            auth.update(AuthState::clear);
            None
        }
        IdentityDirective::Proceed(identity) => {
            auth.update(|a| a.identity = Some(identity.claims.clone()));
            Some(identity)
        }
    }
}

fn spawn_fetch(config: &AppConfig, recipes: RwSignal<RecipesState>, identity: Identity) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match actions::load_recipes(&config, &identity).await {
                Ok(items) => recipes.update(|s| reduce::apply_loaded(s, items)),
                Err(error) => {
                    leptos::logging::warn!("recipe fetch failed: {error}");
                    recipes.update(reduce::apply_load_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, recipes, identity);
    }
}

fn spawn_create(
    config: &AppConfig,
    recipes: RwSignal<RecipesState>,
    new_title: RwSignal<String>,
    identity: Identity,
    title: String,
) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match actions::create_recipe(&config, &identity, &title).await {
                Ok(item) => {
                    recipes.update(|s| reduce::apply_created(s, item));
                    // Clear the input only once the server has the item.
                    new_title.set(String::new());
                }
                Err(error) => {
                    leptos::logging::warn!("recipe create failed: {error}");
                    recipes.update(reduce::apply_action_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, recipes, new_title, identity, title);
    }
}

fn spawn_update(
    config: &AppConfig,
    recipes: RwSignal<RecipesState>,
    identity: Identity,
    sk: String,
    body: UpdateRecipeBody,
) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match actions::update_recipe(&config, &identity, &sk, &body).await {
                Ok(item) => recipes.update(|s| reduce::apply_updated(s, item)),
                Err(error) => {
                    leptos::logging::warn!("recipe update failed: {error}");
                    recipes.update(reduce::apply_action_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, recipes, identity, sk, body);
    }
}

fn spawn_delete(
    config: &AppConfig,
    recipes: RwSignal<RecipesState>,
    identity: Identity,
    sk: String,
) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match actions::delete_recipe(&config, &identity, &sk).await {
                // Removal is keyed by the original secondary key, post-confirmation.
                Ok(()) => recipes.update(|s| reduce::apply_deleted(s, &sk)),
                Err(error) => {
                    leptos::logging::warn!("recipe delete failed: {error}");
                    recipes.update(reduce::apply_action_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, recipes, identity, sk);
    }
}
