//! Character store tests: the 8-per-account cap and (account, class) uniqueness.

use wira_core::{
    error::LeaderboardError,
    model::{InsertOutcome, SkipReason},
    store::LeaderboardStore,
    types::{AccountId, MAX_CHARACTERS_PER_ACCOUNT},
};

fn build_store() -> LeaderboardStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = LeaderboardStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn add_account(store: &LeaderboardStore, username: &str) -> AccountId {
    store
        .insert_account(username, &format!("{username}@example.com"))
        .unwrap()
        .inserted_id()
        .expect("new account")
}

#[test]
fn ninth_character_hits_capacity() {
    let store = build_store();
    let acc = add_account(&store, "collector");

    for class_id in 1..=8 {
        let outcome = store.insert_character(acc, class_id).unwrap();
        assert!(outcome.is_inserted(), "class {class_id} should insert: {outcome:?}");
    }

    let outcome = store.insert_character(acc, 3).unwrap();
    assert_eq!(
        outcome,
        InsertOutcome::Skipped(SkipReason::CapacityExceeded { count: 8 })
    );
    assert_eq!(
        store.character_count_for_account(acc).unwrap(),
        MAX_CHARACTERS_PER_ACCOUNT
    );
}

#[test]
fn duplicate_class_is_a_no_op() {
    let store = build_store();
    let acc = add_account(&store, "twice");

    assert!(store.insert_character(acc, 4).unwrap().is_inserted());
    assert_eq!(
        store.insert_character(acc, 4).unwrap(),
        InsertOutcome::Skipped(SkipReason::DuplicateCharacter)
    );
    assert_eq!(store.character_count_for_account(acc).unwrap(), 1);
}

#[test]
fn same_class_on_different_accounts_is_allowed() {
    let store = build_store();
    let a = add_account(&store, "alpha");
    let b = add_account(&store, "bravo");

    assert!(store.insert_character(a, 1).unwrap().is_inserted());
    assert!(store.insert_character(b, 1).unwrap().is_inserted());

    let keys = store.character_keys().unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|&(_, class_id)| class_id == 1));
}

#[test]
fn out_of_range_class_is_rejected() {
    let store = build_store();
    let acc = add_account(&store, "bad-class");

    for class_id in [0, 9, -1] {
        let err = store.insert_character(acc, class_id).unwrap_err();
        assert!(
            matches!(err, LeaderboardError::InvalidClass { class_id: c } if c == class_id),
            "Unexpected error for class {class_id}: {err}"
        );
    }
    assert_eq!(store.character_count().unwrap(), 0);
}

#[test]
fn unknown_account_is_a_database_error() {
    let store = build_store();
    let err = store.insert_character(999, 1).unwrap_err();
    assert!(matches!(err, LeaderboardError::Database(_)), "got {err}");
}

#[test]
fn all_characters_lists_rows_in_id_order() {
    let store = build_store();
    let acc = add_account(&store, "lister");
    store.insert_character(acc, 5).unwrap();
    store.insert_character(acc, 2).unwrap();

    let chars = store.all_characters().unwrap();
    assert_eq!(chars.len(), 2);
    assert!(chars[0].char_id < chars[1].char_id);
    assert_eq!(chars[0].class_id, 5);
    assert_eq!(chars[1].acc_id, acc);
}
