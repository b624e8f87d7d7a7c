use super::*;

/// Tests retrieving an existing entry.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::imageboard::ImageboardFactory::new(db)
        .image_name("Coffee")
        .image_price(4500)
        .image1(Some("abc.png"))
        .build()
        .await?;

    let repo = ImageboardRepository::new(db);
    let entry = repo.find_by_seq(created.seq).await?;

    assert!(entry.is_some());
    let entry = entry.unwrap();
    assert_eq!(entry.seq, created.seq);
    assert_eq!(entry.image_name, "Coffee");
    assert_eq!(entry.image_price, 4500);
    assert_eq!(entry.image1.as_deref(), Some("abc.png"));

    Ok(())
}

/// Tests retrieving a `seq` that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db).await?;

    let repo = ImageboardRepository::new(db);

    assert!(repo.find_by_seq(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
