use super::*;

fn param(image1: Option<&str>) -> CreateImageboardParam {
    CreateImageboardParam {
        image_id: "img_new".to_string(),
        image_name: "Green tea".to_string(),
        image_price: 2500,
        image_qty: 4,
        image_content: "Cold brewed".to_string(),
        image1: image1.map(str::to_string),
        logtime: NaiveDate::from_ymd_opt(2025, 5, 17).unwrap(),
    }
}

/// Tests inserting an entry without an attached file.
///
/// Expected: Ok with every field persisted and `image1` left empty
#[tokio::test]
async fn creates_entry_without_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageboardRepository::new(db);
    let entry = repo.create(param(None)).await?;

    assert_eq!(entry.image_id, "img_new");
    assert_eq!(entry.image_name, "Green tea");
    assert_eq!(entry.image_price, 2500);
    assert_eq!(entry.image_qty, 4);
    assert_eq!(entry.image_content, "Cold brewed");
    assert_eq!(entry.image1, None);
    assert_eq!(entry.logtime, NaiveDate::from_ymd_opt(2025, 5, 17).unwrap());

    let stored = entity::prelude::Imageboard::find_by_id(entry.seq)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.imagename, "Green tea");

    Ok(())
}

/// Tests that the storage key is persisted as `image1`.
///
/// Expected: Ok with `image1` equal to the given key
#[tokio::test]
async fn creates_entry_with_image_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageboardRepository::new(db);
    let entry = repo.create(param(Some("0a1b2c.jpg"))).await?;

    assert_eq!(entry.image1.as_deref(), Some("0a1b2c.jpg"));

    Ok(())
}

/// Tests that successive inserts receive increasing `seq` values.
///
/// Expected: Ok with the second `seq` greater than the first
#[tokio::test]
async fn assigns_increasing_seq() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_imageboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageboardRepository::new(db);
    let first = repo.create(param(None)).await?;
    let second = repo.create(param(None)).await?;

    assert!(second.seq > first.seq);
    assert_eq!(entity::prelude::Imageboard::find().count(db).await?, 2);

    Ok(())
}

/// Tests inserting into a database without the imageboard table.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageboardRepository::new(db);
    let result = repo.create(param(None)).await;

    assert!(result.is_err());

    Ok(())
}
