use payloads::{Candidate, PageRequest, Resource};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

fn second_page() -> PageRequest {
    PageRequest {
        table: Candidate::TABLE.to_string(),
        select: Candidate::SELECT.to_string(),
        order: Candidate::default_order(),
        page: 2,
        page_size: 20,
    }
}

#[tokio::test]
async fn direct_and_builder_windows_agree() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = app.seed_candidates(45)?;
    let request = second_page();

    let direct: Vec<Candidate> = app.client.page_direct(&request).await?;
    let (from, to) = request.range();
    let built = app
        .client
        .from(&request.table)
        .select(&request.select)
        .order(&request.order.column, request.order.direction.is_ascending())
        .range(from, to)
        .count_exact()
        .execute::<Candidate>()
        .await?;

    assert_eq!(direct, expected[20..40]);
    assert_eq!(built.rows, direct);
    assert_eq!(built.total_count, Some(45));
    Ok(())
}

#[tokio::test]
async fn both_count_forms_agree() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(7)?;

    assert_eq!(app.client.count_direct(Candidate::TABLE).await?, 7);
    assert_eq!(app.client.from(Candidate::TABLE).count().await?, 7);
    Ok(())
}

#[tokio::test]
async fn requests_without_valid_key_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_candidates(3)?;
    let client = app.client_with_key("wrong-key");

    assert_status_code(
        client.count_direct(Candidate::TABLE).await,
        StatusCode::UNAUTHORIZED,
    );
    assert_status_code(
        client.page_direct::<Candidate>(&second_page()).await,
        StatusCode::UNAUTHORIZED,
    );
    Ok(())
}

#[tokio::test]
async fn unknown_table_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.count_direct("placements").await,
        StatusCode::NOT_FOUND,
    );
    Ok(())
}
