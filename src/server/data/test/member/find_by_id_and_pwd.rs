use super::*;

fn login(id: &str, pwd: &str) -> LoginParam {
    LoginParam {
        id: id.to_string(),
        pwd: pwd.to_string(),
    }
}

/// Tests matching both id and password.
///
/// Expected: Ok(Some) with the member's id and name
#[tokio::test]
async fn finds_member_with_matching_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .id("kim")
        .pwd("secret")
        .name("Kim Cheolsu")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo.find_by_id_and_pwd(&login("kim", "secret")).await?;

    assert!(member.is_some());
    let member = member.unwrap();
    assert_eq!(member.id, "kim");
    assert_eq!(member.name, "Kim Cheolsu");

    Ok(())
}

/// Tests a wrong password for an existing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .id("kim")
        .pwd("secret")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_id_and_pwd(&login("kim", "Secret")).await?.is_none());

    Ok(())
}

/// Tests an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo
        .find_by_id_and_pwd(&login("nobody", &member.pwd))
        .await?
        .is_none());

    Ok(())
}

/// Tests that empty credentials never match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_empty_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_id_and_pwd(&login("", "")).await?.is_none());

    Ok(())
}
