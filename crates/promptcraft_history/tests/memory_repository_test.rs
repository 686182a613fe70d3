//! In-process repository and live feed.

use chrono::{Duration, Utc};
use promptcraft_core::{HistoryRecord, PromptVariant, UserId};
use promptcraft_history::{HistoryFeed, InMemoryHistoryRepository, LOCAL_HISTORY_LIMIT};
use promptcraft_interface::{HistoryEvent, HistoryRepository};

fn variant(text: &str) -> PromptVariant {
    PromptVariant::new(text, "")
}

#[tokio::test]
async fn list_recent_is_per_user_newest_first_and_limited() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    for i in 0..4 {
        repo.insert(&alice, &format!("alice {}", i), &variant("p")).await?;
    }
    repo.insert(&bob, "bob 0", &variant("p")).await?;

    let recent = repo.list_recent(&alice, 3).await?;
    let ideas: Vec<&str> = recent.iter().map(|r| r.original_idea().as_str()).collect();
    assert_eq!(ideas, ["alice 3", "alice 2", "alice 1"]);
    assert!(recent.iter().all(|r| r.user_id() == &Some(alice.clone())));
    Ok(())
}

#[tokio::test]
async fn delete_all_only_touches_one_user() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    repo.insert(&alice, "a", &variant("p")).await?;
    repo.insert(&bob, "b", &variant("p")).await?;

    repo.delete_all(&alice).await?;
    assert!(repo.list_recent(&alice, 10).await?.is_empty());
    assert_eq!(repo.list_recent(&bob, 10).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn insert_caps_each_user_to_the_newest_records() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    assert_eq!(repo.limit(), LOCAL_HISTORY_LIMIT);
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    repo.insert(&bob, "bob's only", &variant("p")).await?;

    let total = LOCAL_HISTORY_LIMIT + 15;
    for i in 0..total {
        repo.insert(&alice, &format!("idea {}", i), &variant("p")).await?;
    }

    let kept = repo.list_recent(&alice, usize::MAX).await?;
    assert_eq!(kept.len(), LOCAL_HISTORY_LIMIT);
    assert_eq!(kept[0].original_idea(), &format!("idea {}", total - 1));
    assert_eq!(
        kept[LOCAL_HISTORY_LIMIT - 1].original_idea(),
        &format!("idea {}", total - LOCAL_HISTORY_LIMIT)
    );

    // Another user's history is not evicted by alice's inserts.
    assert_eq!(repo.list_recent(&bob, 10).await?.len(), 1);
    assert_eq!(repo.len().await, LOCAL_HISTORY_LIMIT + 1);
    Ok(())
}

#[tokio::test]
async fn custom_limit_is_honoured() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::with_limit(3);
    let alice = UserId::new("alice");
    for i in 0..5 {
        repo.insert(&alice, &format!("idea {}", i), &variant("p")).await?;
    }
    let ideas: Vec<String> = repo
        .list_recent(&alice, 10)
        .await?
        .iter()
        .map(|r| r.original_idea().clone())
        .collect();
    assert_eq!(ideas, ["idea 4", "idea 3", "idea 2"]);
    Ok(())
}

#[tokio::test]
async fn delete_removes_one_owned_record() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let keep = repo.insert(&alice, "keep", &variant("p")).await?;
    let gone = repo.insert(&alice, "gone", &variant("p")).await?;
    let mut events = repo.subscribe(&alice).await?;

    // Bob cannot delete alice's record.
    assert!(!repo.delete(&bob, gone.id()).await?);
    assert!(repo.delete(&alice, gone.id()).await?);
    assert!(!repo.delete(&alice, gone.id()).await?);

    assert_eq!(repo.list_recent(&alice, 10).await?, vec![keep]);
    assert_eq!(events.next().await, Some(HistoryEvent::Removed(*gone.id())));
    Ok(())
}

#[tokio::test]
async fn subscription_sees_only_own_events() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let mut feed = repo.subscribe(&alice).await?;
    assert_eq!(feed.user_id(), &alice);

    repo.insert(&bob, "not yours", &variant("p")).await?;
    let mine = repo.insert(&alice, "yours", &variant("p")).await?;
    repo.delete_all(&alice).await?;

    assert_eq!(feed.next().await, Some(HistoryEvent::Inserted(mine)));
    assert_eq!(feed.next().await, Some(HistoryEvent::Deleted));
    Ok(())
}

#[tokio::test]
async fn feed_tracks_subscription_events() -> anyhow::Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let alice = UserId::new("alice");
    let mut subscription = repo.subscribe(&alice).await?;

    let mut feed = HistoryFeed::with_records(repo.list_recent(&alice, 5).await?, 5);
    for i in 0..3 {
        repo.insert(&alice, &format!("idea {}", i), &variant("p")).await?;
        let event = subscription.next().await.expect("repository still open");
        feed = feed.apply(event);
    }

    assert_eq!(feed.len(), 3);
    assert_eq!(feed.records()[0].original_idea(), "idea 2");
    Ok(())
}

#[test]
fn feed_truncates_to_capacity() {
    let now = Utc::now();
    let mut feed = HistoryFeed::new(2);
    for i in 0..3 {
        let record = HistoryRecord::with_timestamp(
            None,
            format!("idea {}", i),
            variant("p"),
            now + Duration::seconds(i),
        );
        feed = feed.apply(HistoryEvent::Inserted(record));
    }

    let ideas: Vec<&str> = feed.records().iter().map(|r| r.original_idea().as_str()).collect();
    assert_eq!(ideas, ["idea 2", "idea 1"]);
}

#[test]
fn feed_ignores_duplicate_ids() {
    let record = HistoryRecord::new(None, "once", variant("p"));
    let feed = HistoryFeed::default()
        .apply(HistoryEvent::Inserted(record.clone()))
        .apply(HistoryEvent::Inserted(record.clone()));
    assert_eq!(feed.records(), &vec![record]);
}

#[test]
fn removing_a_shown_record_flags_reload() {
    let first = HistoryRecord::new(None, "first", variant("p"));
    let second = HistoryRecord::new(None, "second", variant("p"));
    let feed = HistoryFeed::default()
        .apply(HistoryEvent::Inserted(first.clone()))
        .apply(HistoryEvent::Inserted(second.clone()));

    let unchanged = feed.clone().apply(HistoryEvent::Removed(uuid_of_unknown()));
    assert_eq!(unchanged.len(), 2);
    assert!(!unchanged.needs_reload());

    let feed = feed.apply(HistoryEvent::Removed(*second.id()));
    assert_eq!(feed.records(), &vec![first]);
    assert!(feed.needs_reload());
}

fn uuid_of_unknown() -> promptcraft_core::RecordId {
    *HistoryRecord::new(None, "never shown", variant("p")).id()
}

#[test]
fn delete_clears_and_reload_resets_flag() {
    let record = HistoryRecord::new(None, "idea", variant("p"));
    let feed = HistoryFeed::default()
        .apply(HistoryEvent::Inserted(record.clone()))
        .apply(HistoryEvent::Deleted);
    assert!(feed.is_empty());
    assert!(feed.needs_reload());

    let feed = feed.reloaded(vec![record]);
    assert_eq!(feed.len(), 1);
    assert!(!feed.needs_reload());
}
