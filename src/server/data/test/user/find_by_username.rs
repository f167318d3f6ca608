use super::*;

#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_groups(db, "alice", &["admin"]).await?;

    let found = UserRepository::new(db).find_by_username("alice").await?;

    let found = found.expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.groups, vec!["admin"]);

    Ok(())
}

/// Usernames are matched exactly, not by prefix or case-insensitively.
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_groups(db, "alice", &[]).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("alic").await?.is_none());
    assert!(repo.find_by_username("ALICE").await?.is_none());

    Ok(())
}
