use payloads::Candidate;
use query::FetchOutcome;
use std::time::Duration;
use test_helpers::{FaultPlan, spawn_app};

use crate::query_for;

#[tokio::test]
async fn builder_path_serves_same_rows_when_direct_fails() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(45)?;

    let healthy = query_for::<Candidate>(&app.client);
    healthy.start().await;
    healthy.load_more().await;

    app.backend.set_faults(FaultPlan {
        fail_direct: true,
        ..Default::default()
    });
    app.backend.reset_counts();
    let degraded = query_for::<Candidate>(&app.client);
    assert_eq!(degraded.start().await, FetchOutcome::Applied);
    assert_eq!(degraded.load_more().await, FetchOutcome::Applied);

    assert_eq!(degraded.data(), healthy.data());
    assert_eq!(degraded.data(), expected[..40]);
    assert_eq!(degraded.snapshot().total_count, 45);

    let counts = app.backend.counts();
    assert_eq!(counts.direct_pages, 2);
    assert_eq!(counts.builder_pages, 2);
    assert!(counts.builder_counts >= 1);
    Ok(())
}

#[tokio::test]
async fn slow_direct_request_times_out_into_builder() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(30)?;
    app.backend.set_faults(FaultPlan {
        direct_delay: Some(Duration::from_secs(2)),
        ..Default::default()
    });
    let query = query_for::<Candidate>(&app.client);

    assert_eq!(query.start().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert_eq!(state.items, expected[..20]);
    assert_eq!(state.total_count, 30);
    assert!(state.error.is_none());
    Ok(())
}

#[tokio::test]
async fn total_failure_surfaces_error_and_keeps_rows() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(45)?;
    let query = query_for::<Candidate>(&app.client);
    query.start().await;

    app.backend.set_faults(FaultPlan {
        fail_direct: true,
        fail_builder: true,
        ..Default::default()
    });
    let FetchOutcome::Failed(message) = query.load_more().await else {
        panic!("expected the second page to fail");
    };
    let state = query.snapshot();
    assert_eq!(state.error.as_deref(), Some(message.as_str()));
    assert_eq!(state.items, expected[..20]);
    assert_eq!(state.page, 1);
    assert!(state.has_more);
    assert!(!state.loading);

    // recovery clears the error
    app.backend.set_faults(FaultPlan::default());
    assert_eq!(query.load_more().await, FetchOutcome::Applied);
    let state = query.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.items, expected[..40]);
    Ok(())
}

#[tokio::test]
async fn first_load_failure_leaves_list_empty() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(5)?;
    app.backend.set_faults(FaultPlan {
        fail_direct: true,
        fail_builder: true,
        ..Default::default()
    });
    let query = query_for::<Candidate>(&app.client);

    assert!(matches!(query.start().await, FetchOutcome::Failed(_)));
    let state = query.snapshot();
    assert!(state.items.is_empty());
    assert!(state.error.is_some());
    assert_eq!(state.total_count, 0);
    // one direct try, then every retry of the builder
    assert_eq!(app.backend.counts().builder_pages, 2);
    Ok(())
}

#[tokio::test]
async fn count_falls_back_to_head_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(12)?;
    app.backend.set_faults(FaultPlan {
        fail_direct: true,
        ..Default::default()
    });
    let query = query_for::<Candidate>(&app.client);

    assert_eq!(query.fetch_total_count().await, 12);
    assert_eq!(query.snapshot().total_count, 12);
    let counts = app.backend.counts();
    assert_eq!(counts.direct_counts, 1);
    assert_eq!(counts.builder_counts, 1);
    Ok(())
}

#[tokio::test]
async fn count_reports_zero_when_both_paths_fail() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(12)?;
    app.backend.set_faults(FaultPlan {
        fail_direct: true,
        fail_builder: true,
        ..Default::default()
    });
    let query = query_for::<Candidate>(&app.client);

    assert_eq!(query.fetch_total_count().await, 0);
    assert_eq!(query.snapshot().total_count, 0);
    Ok(())
}
