//! Wire-schema DTOs for the recipes API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's item schema (single-table layout with
//! `PK`/`SK` keys) so serde round-trips stay lossless. Fields the server
//! omits on some responses are optional with defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Prefix the server puts on an item's secondary key.
pub const RECIPE_SK_PREFIX: &str = "RECIPE#";

/// Placeholder details attached to newly created items.
pub const DEFAULT_RECIPE_DETAILS: &str = "Default details";

/// Placeholder date attached to newly created items.
pub const DEFAULT_RECIPE_DATE: &str = "2025-12-31";

/// One recipe item as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Partition key (`USER#<email>`), present on full item payloads.
    #[serde(rename = "PK", default)]
    pub pk: Option<String>,
    /// Server-assigned secondary key (`RECIPE#<id>`); identifies the item.
    #[serde(rename = "SK")]
    pub sk: String,
    pub recipe_title: String,
    #[serde(default)]
    pub recipe_details: Option<String>,
    #[serde(default)]
    pub recipe_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /recipes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecipeBody {
    pub user_email: String,
    pub recipe_title: String,
    pub recipe_details: String,
    pub recipe_date: String,
}

impl CreateRecipeBody {
    /// Body for a user-entered title with the fixed placeholder fields.
    pub fn with_title(user_email: &str, recipe_title: &str) -> Self {
        Self {
            user_email: user_email.to_owned(),
            recipe_title: recipe_title.to_owned(),
            recipe_details: DEFAULT_RECIPE_DETAILS.to_owned(),
            recipe_date: DEFAULT_RECIPE_DATE.to_owned(),
        }
    }
}

/// Body for `PATCH /recipes/{id}`: only changed fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecipeBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_details: Option<String>,
}

impl UpdateRecipeBody {
    pub fn is_empty(&self) -> bool {
        self.recipe_title.is_none() && self.recipe_details.is_none()
    }

    /// Body carrying only the fields that differ from `item`.
    pub fn diff(item: &RecipeItem, recipe_title: &str, recipe_details: &str) -> Self {
        Self {
            recipe_title: (recipe_title != item.recipe_title)
                .then(|| recipe_title.to_owned()),
            recipe_details: (Some(recipe_details)
                != item.recipe_details.as_deref())
            .then(|| recipe_details.to_owned()),
        }
    }
}

/// Strip the secondary-key prefix to obtain the server-side recipe id.
///
/// Keys without the prefix pass through unchanged.
pub fn recipe_id_from_sk(sk: &str) -> &str {
    sk.strip_prefix(RECIPE_SK_PREFIX).unwrap_or(sk)
}
