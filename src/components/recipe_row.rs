//! One recipe list row with edit and delete affordances.

use leptos::prelude::*;

use crate::net::types::RecipeItem;

/// A single row: title, details, and the two item actions.
///
/// All behavior is delegated upward through callbacks keyed by the item's
/// secondary key; the row itself never touches the network.
#[component]
pub fn RecipeRow(
    item: RecipeItem,
    on_edit: Callback<RecipeItem>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let sk = item.sk.clone();
    let edit_item = item.clone();
    let details = item.recipe_details.clone().unwrap_or_default();

    view! {
        <div class="recipe-row">
            <h3 class="recipe-row__title">{item.recipe_title.clone()}</h3>
            <p class="recipe-row__details">{details}</p>
            <button
                class="btn recipe-row__edit"
                on:click=move |_| on_edit.run(edit_item.clone())
            >
                "Edit"
            </button>
            <button
                class="btn btn--danger recipe-row__delete"
                on:click=move |_| on_delete.run(sk.clone())
            >
                "Delete"
            </button>
        </div>
    }
}
