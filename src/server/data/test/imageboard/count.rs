use super::*;

/// Tests counting an empty board.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_empty_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageboardRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests counting all entries.
///
/// Expected: Ok(7)
#[tokio::test]
async fn counts_all_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entries(db, 7).await?;

    let repo = ImageboardRepository::new(db);

    assert_eq!(repo.count().await?, 7);

    Ok(())
}
