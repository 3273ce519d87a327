use super::*;

#[test]
fn recipe_item_deserializes_minimal_server_payload() {
    let json = r#"[{"SK":"RECIPE#1","recipe_title":"Eggs","recipe_details":"buy"}]"#;
    let items: Vec<RecipeItem> = serde_json::from_str(json).expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sk, "RECIPE#1");
    assert_eq!(items[0].recipe_title, "Eggs");
    assert_eq!(items[0].recipe_details.as_deref(), Some("buy"));
    assert_eq!(items[0].pk, None);
}

#[test]
fn recipe_item_deserializes_full_server_payload() {
    let json = serde_json::json!({
        "PK": "USER#a@x.com",
        "SK": "RECIPE#01HTZ",
        "recipe_title": "Milk",
        "recipe_details": "Default details",
        "recipe_date": "2025-12-31",
        "created_at": "2025-01-05T05:51:02.350Z",
        "updated_at": "2025-01-06T02:31:02.350Z",
    });
    let item: RecipeItem = serde_json::from_value(json).expect("item");
    assert_eq!(item.pk.as_deref(), Some("USER#a@x.com"));
    assert_eq!(item.recipe_date.as_deref(), Some("2025-12-31"));
}

#[test]
fn create_body_with_title_uses_placeholder_fields() {
    let body = CreateRecipeBody::with_title("a@x.com", "Milk");
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "user_email": "a@x.com",
            "recipe_title": "Milk",
            "recipe_details": "Default details",
            "recipe_date": "2025-12-31",
        })
    );
}

#[test]
fn update_body_serializes_only_changed_fields() {
    let body = UpdateRecipeBody {
        recipe_title: Some("Milk (2l)".to_owned()),
        recipe_details: None,
    };
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(json, serde_json::json!({ "recipe_title": "Milk (2l)" }));
    assert!(!body.is_empty());
    assert!(UpdateRecipeBody::default().is_empty());
}

#[test]
fn update_body_diff_carries_only_changed_fields() {
    let item = RecipeItem {
        pk: None,
        sk: "RECIPE#1".to_owned(),
        recipe_title: "Eggs".to_owned(),
        recipe_details: Some("buy".to_owned()),
        recipe_date: None,
        created_at: None,
        updated_at: None,
    };

    let body = UpdateRecipeBody::diff(&item, "Eggs", "buy");
    assert!(body.is_empty());

    let body = UpdateRecipeBody::diff(&item, "Eggs (dozen)", "buy");
    assert_eq!(body.recipe_title.as_deref(), Some("Eggs (dozen)"));
    assert_eq!(body.recipe_details, None);

    let body = UpdateRecipeBody::diff(&item, "Eggs", "buy two");
    assert_eq!(body.recipe_title, None);
    assert_eq!(body.recipe_details.as_deref(), Some("buy two"));
}

#[test]
fn recipe_id_from_sk_strips_prefix() {
    assert_eq!(recipe_id_from_sk("RECIPE#1"), "1");
    assert_eq!(recipe_id_from_sk("RECIPE#01HTZx9"), "01HTZx9");
}

#[test]
fn recipe_id_from_sk_passes_through_unprefixed_keys() {
    assert_eq!(recipe_id_from_sk("already-bare"), "already-bare");
}
