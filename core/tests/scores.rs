//! Score store tests: idempotent inserts, range checks, lookup by username.

use wira_core::{
    error::LeaderboardError,
    model::{ClassScore, InsertOutcome, SkipReason},
    store::LeaderboardStore,
    types::CharacterId,
};

fn build_store() -> LeaderboardStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = LeaderboardStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

/// One account owning characters of classes 1..=n. Returns the character ids.
fn seed_characters(store: &LeaderboardStore, username: &str, n: i64) -> Vec<CharacterId> {
    let acc = store
        .insert_account(username, &format!("{username}@example.com"))
        .unwrap()
        .inserted_id()
        .unwrap();
    (1..=n)
        .map(|class_id| store.insert_character(acc, class_id).unwrap().inserted_id().unwrap())
        .collect()
}

#[test]
fn reinserting_the_same_score_leaves_one_row() {
    let store = build_store();
    let ids = seed_characters(&store, "player5", 5);
    assert_eq!(ids[4], 5, "Fifth character should have char_id 5");

    assert!(store.insert_score(5, 2, 300).unwrap().is_inserted());
    assert_eq!(
        store.insert_score(5, 2, 300).unwrap(),
        InsertOutcome::Skipped(SkipReason::DuplicateScore)
    );

    let scores = store.all_scores().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].char_id, 5);
    assert_eq!(scores[0].class_id, 2);
    assert_eq!(scores[0].reward_score, 300);
}

#[test]
fn conflicting_score_keeps_first_value() {
    let store = build_store();
    let ids = seed_characters(&store, "keeper", 1);

    store.insert_score(ids[0], 1, 100).unwrap();
    store.insert_score(ids[0], 1, 999).unwrap();

    assert_eq!(store.score_count().unwrap(), 1);
    assert_eq!(store.all_scores().unwrap()[0].reward_score, 100);
}

#[test]
fn reward_range_is_enforced() {
    let store = build_store();
    let ids = seed_characters(&store, "ranged", 1);

    assert!(store.insert_score(ids[0], 1, 0).unwrap().is_inserted());
    let err = store.insert_score(ids[0], 1, 1000).unwrap_err();
    assert!(matches!(err, LeaderboardError::InvalidRewardScore { reward_score: 1000 }));
    let err = store.insert_score(ids[0], 1, -1).unwrap_err();
    assert!(matches!(err, LeaderboardError::InvalidRewardScore { reward_score: -1 }));
}

#[test]
fn scores_for_username_joins_through_characters() {
    let store = build_store();
    let mine = seed_characters(&store, "me", 2);
    let theirs = seed_characters(&store, "them", 1);

    store.insert_score(mine[1], 2, 640).unwrap();
    store.insert_score(mine[0], 1, 320).unwrap();
    store.insert_score(theirs[0], 1, 999).unwrap();

    let scores = store.scores_for_username("me").unwrap();
    assert_eq!(
        scores,
        vec![
            ClassScore { class_id: 1, reward_score: 320 },
            ClassScore { class_id: 2, reward_score: 640 },
        ]
    );
}

#[test]
fn unknown_username_has_no_scores() {
    let store = build_store();
    seed_characters(&store, "someone", 1);
    let scores = store.scores_for_username("nonexistent").unwrap();
    assert!(scores.is_empty());
}
