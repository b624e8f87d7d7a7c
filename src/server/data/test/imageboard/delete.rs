use super::*;

/// Tests deleting an existing entry.
///
/// Expected: Ok(1) and the entry no longer exists
#[tokio::test]
async fn deletes_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::create_entry(db).await?;
    let other = factory::create_entry(db).await?;

    let repo = ImageboardRepository::new(db);
    assert!(repo.exists(entry.seq).await?);

    let removed = repo.delete(entry.seq).await?;

    assert_eq!(removed, 1);
    assert!(!repo.exists(entry.seq).await?);
    assert!(repo.exists(other.seq).await?);

    Ok(())
}

/// Tests deleting a `seq` that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_entry_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db).await?;

    let repo = ImageboardRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
