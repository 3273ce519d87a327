use super::*;

fn item(sk: &str, title: &str) -> RecipeItem {
    RecipeItem {
        pk: Some("USER#a@x.com".to_owned()),
        sk: sk.to_owned(),
        recipe_title: title.to_owned(),
        recipe_details: Some("buy".to_owned()),
        recipe_date: Some("2025-12-31".to_owned()),
        created_at: None,
        updated_at: None,
    }
}

fn ready_state(items: Vec<RecipeItem>) -> RecipesState {
    let mut state = RecipesState::default();
    apply_loaded(&mut state, items);
    state
}

#[test]
fn apply_loaded_replaces_list_wholesale() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs")]);
    apply_loaded(&mut state, vec![item("RECIPE#7", "Tea"), item("RECIPE#8", "Jam")]);

    assert_eq!(state.phase, SyncPhase::Ready);
    let titles: Vec<&str> = state.items.iter().map(|i| i.recipe_title.as_str()).collect();
    assert_eq!(titles, ["Tea", "Jam"]);
}

#[test]
fn apply_load_failed_keeps_existing_items() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs")]);
    begin_loading(&mut state);
    apply_load_failed(&mut state);

    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn mark_unauthenticated_sets_phase() {
    let mut state = RecipesState::default();
    mark_unauthenticated(&mut state);
    assert_eq!(state.phase, SyncPhase::Unauthenticated);
}

#[test]
fn begin_action_tracks_pending_kind() {
    let mut state = ready_state(vec![]);
    begin_action(&mut state, PendingAction::Delete);
    assert_eq!(state.phase, SyncPhase::ActionInFlight(PendingAction::Delete));
}

#[test]
fn apply_created_appends_without_reordering() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs")]);
    begin_action(&mut state, PendingAction::Create);
    apply_created(&mut state, item("RECIPE#2", "Milk"));

    assert_eq!(state.phase, SyncPhase::Ready);
    let keys: Vec<&str> = state.items.iter().map(|i| i.sk.as_str()).collect();
    assert_eq!(keys, ["RECIPE#1", "RECIPE#2"]);
}

#[test]
fn n_creates_grow_list_by_n() {
    let mut state = ready_state(vec![]);
    for n in 0..5 {
        apply_created(&mut state, item(&format!("RECIPE#{n}"), &format!("Item {n}")));
    }
    assert_eq!(state.items.len(), 5);
}

#[test]
fn apply_updated_replaces_matching_item_in_place() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs"), item("RECIPE#2", "Milk")]);
    apply_updated(&mut state, item("RECIPE#1", "Eggs (dozen)"));

    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.items[0].recipe_title, "Eggs (dozen)");
    assert_eq!(state.items[1].recipe_title, "Milk");
}

#[test]
fn apply_updated_misses_leave_list_unchanged() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs")]);
    apply_updated(&mut state, item("RECIPE#404", "Ghost"));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].recipe_title, "Eggs");
}

#[test]
fn apply_deleted_removes_only_matching_key() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs"), item("RECIPE#2", "Milk")]);
    begin_action(&mut state, PendingAction::Delete);
    apply_deleted(&mut state, "RECIPE#1");

    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].sk, "RECIPE#2");
}

#[test]
fn apply_deleted_then_loaded_never_resurrects_key() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs"), item("RECIPE#2", "Milk")]);
    apply_deleted(&mut state, "RECIPE#1");
    apply_loaded(&mut state, vec![item("RECIPE#2", "Milk")]);

    assert!(state.items.iter().all(|i| i.sk != "RECIPE#1"));
}

#[test]
fn apply_action_failed_keeps_list_unchanged() {
    let mut state = ready_state(vec![item("RECIPE#1", "Eggs")]);
    begin_action(&mut state, PendingAction::Create);
    apply_action_failed(&mut state);

    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.items.len(), 1);
}
