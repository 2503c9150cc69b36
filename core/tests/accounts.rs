//! Account store tests: checked insert, duplicate usernames, listing.

use wira_core::{
    model::{InsertOutcome, SkipReason},
    store::LeaderboardStore,
};

fn build_store() -> LeaderboardStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = LeaderboardStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

#[test]
fn insert_account_assigns_fresh_ids() {
    let store = build_store();

    let first = store.insert_account("player1", "player1@example.com").unwrap();
    let second = store.insert_account("player2", "player2@example.com").unwrap();

    let (a, b) = match (first, second) {
        (InsertOutcome::Inserted(a), InsertOutcome::Inserted(b)) => (a, b),
        other => panic!("Expected two inserts, got {other:?}"),
    };
    assert_ne!(a, b, "Surrogate ids must differ");

    let accounts = store.all_accounts().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].username, "player1");
    assert_eq!(accounts[1].email, "player2@example.com");
}

#[test]
fn duplicate_username_is_skipped_without_write() {
    let store = build_store();
    store.insert_account("player3", "player3@example.com").unwrap();

    let outcome = store.insert_account("player3", "someone-else@example.com").unwrap();
    assert_eq!(outcome, InsertOutcome::Skipped(SkipReason::DuplicateUsername));
    assert_eq!(store.account_count().unwrap(), 1);

    let kept = store.account_by_username("player3").unwrap().expect("account exists");
    assert_eq!(kept.email, "player3@example.com", "Original row must be untouched");
}

#[test]
fn insert_or_ignore_reports_conflicts() {
    let store = build_store();

    assert!(store.insert_account_or_ignore("dup", "a@example.com").unwrap().is_inserted());
    assert_eq!(
        store.insert_account_or_ignore("dup", "b@example.com").unwrap(),
        InsertOutcome::Skipped(SkipReason::DuplicateUsername)
    );
    assert_eq!(store.account_count().unwrap(), 1);
}

#[test]
fn unknown_username_lookup_is_none() {
    let store = build_store();
    assert!(store.account_by_username("ghost").unwrap().is_none());
}

#[test]
fn migrate_is_idempotent() {
    let store = build_store();
    store.insert_account("keep-me", "k@example.com").unwrap();
    store.migrate().expect("second migration");
    assert_eq!(store.account_count().unwrap(), 1);
}
