use payloads::Candidate;
use query::{FetchOutcome, Revalidated, Trigger};
use test_helpers::spawn_app;

use crate::query_for;

#[tokio::test]
async fn returning_to_the_tab_picks_up_new_rows() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(3)?;
    let query = query_for::<Candidate>(&app.client);
    query.start().await;
    assert_eq!(query.data(), expected);

    assert_eq!(
        query.revalidate(Trigger::Visibility { visible: false }).await,
        Revalidated::Ignored
    );
    app.backend.insert_rows(&[test_helpers::candidate(3)])?;

    assert_eq!(
        query.revalidate(Trigger::Visibility { visible: true }).await,
        Revalidated::Refetched(FetchOutcome::Applied)
    );
    let state = query.snapshot();
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.total_count, 4);
    Ok(())
}

#[tokio::test]
async fn coming_back_online_refetches_page_one() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(25)?;
    let query = query_for::<Candidate>(&app.client);
    query.start().await;
    query.load_more().await;
    assert_eq!(query.snapshot().page, 2);

    assert_eq!(
        query.revalidate(Trigger::Online).await,
        Revalidated::Refetched(FetchOutcome::Applied)
    );
    let state = query.snapshot();
    assert_eq!(state.page, 1);
    assert_eq!(state.items.len(), 20);
    Ok(())
}
