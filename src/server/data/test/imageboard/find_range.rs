use super::*;

/// Tests that the first page holds the five newest entries, newest first.
///
/// Expected: Ok with seq values of entries 12 down to 8
#[tokio::test]
async fn returns_newest_entries_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_entries(db, 12).await?;

    let repo = ImageboardRepository::new(db);
    let page = repo.find_range(RowRange::for_page(1)).await?;

    let expected: Vec<i32> = created.iter().rev().take(5).map(|e| e.seq).collect();
    let actual: Vec<i32> = page.iter().map(|e| e.seq).collect();
    assert_eq!(actual, expected);

    Ok(())
}

/// Tests a partially filled last page.
///
/// Expected: Ok with the two oldest entries
#[tokio::test]
async fn returns_remaining_entries_on_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_entries(db, 12).await?;

    let repo = ImageboardRepository::new(db);
    let page = repo.find_range(RowRange::for_page(3)).await?;

    let actual: Vec<i32> = page.iter().map(|e| e.seq).collect();
    assert_eq!(actual, vec![created[1].seq, created[0].seq]);

    Ok(())
}

/// Tests a page past the end of the board.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entries(db, 12).await?;

    let repo = ImageboardRepository::new(db);
    let page = repo.find_range(RowRange::for_page(4)).await?;

    assert!(page.is_empty());

    Ok(())
}

/// Tests that a non-positive page selects nothing instead of failing.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_for_non_positive_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entries(db, 3).await?;

    let repo = ImageboardRepository::new(db);

    assert!(repo.find_range(RowRange::for_page(0)).await?.is_empty());
    assert!(repo.find_range(RowRange::for_page(-1)).await?.is_empty());

    Ok(())
}
