use payloads::{Candidate, Client};
use query::{FetchOutcome, SkipReason};
use test_helpers::spawn_app;

use crate::query_for;

#[tokio::test]
async fn pages_through_all_candidates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(45)?;
    let query = query_for::<Candidate>(&app.client);

    assert_eq!(query.start().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert_eq!(state.items, expected[..20]);
    assert_eq!(state.total_count, 45);
    assert!(state.has_more);
    assert_eq!(state.page, 1);

    assert_eq!(query.load_more().await, FetchOutcome::Applied);
    assert_eq!(query.load_more().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert_eq!(state.items, expected);
    assert_eq!(state.page, 3);
    assert!(!state.has_more);
    assert_eq!(state.total_count, 45);

    assert_eq!(
        query.load_more().await,
        FetchOutcome::Skipped(SkipReason::NoMorePages)
    );
    Ok(())
}

#[tokio::test]
async fn empty_table_loads_without_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_empty::<Candidate>();
    let query = query_for::<Candidate>(&app.client);

    assert_eq!(query.start().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert!(state.items.is_empty());
    assert_eq!(state.total_count, 0);
    assert!(!state.has_more);
    assert!(state.error.is_none());
    Ok(())
}

#[tokio::test]
async fn exact_multiple_needs_one_empty_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(40)?;
    let query = query_for::<Candidate>(&app.client);

    query.start().await;
    query.load_more().await;
    assert!(query.snapshot().has_more);

    assert_eq!(query.load_more().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert_eq!(state.items.len(), 40);
    assert_eq!(state.page, 3);
    assert!(!state.has_more);
    Ok(())
}

#[tokio::test]
async fn refresh_after_load_more_starts_over() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(45)?;
    let query = query_for::<Candidate>(&app.client);

    query.start().await;
    query.load_more().await;
    assert_eq!(query.snapshot().items.len(), 40);

    app.backend.clear_table("candidates");
    app.backend.insert_rows(&expected[..5])?;

    assert_eq!(query.refresh().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert_eq!(state.items, expected[..5]);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_count, 5);
    assert!(!state.has_more);
    Ok(())
}

#[tokio::test]
async fn ascending_resources_keep_their_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_clients(25)?;
    let query = query_for::<Client>(&app.client);

    query.start().await;
    query.load_more().await;
    assert_eq!(query.data(), expected);
    Ok(())
}

#[tokio::test]
async fn unmounted_query_leaves_state_alone() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(10)?;
    let query = query_for::<Candidate>(&app.client);
    query.unmount();

    assert_eq!(
        query.start().await,
        FetchOutcome::Skipped(SkipReason::Unmounted)
    );
    assert!(query.data().is_empty());
    assert_eq!(app.backend.counts(), Default::default());
    Ok(())
}
