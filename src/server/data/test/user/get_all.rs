use super::*;

/// Tests listing users in creation order.
///
/// Expected: Ok with users ordered by id regardless of username
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_groups(db, "zoe", &["ops"]).await?;
    factory::create_user_with_groups(db, "adam", &[]).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "zoe");
    assert_eq!(users[0].groups, vec!["ops"]);
    assert_eq!(users[1].username, "adam");
    assert!(users[0].id < users[1].id);

    Ok(())
}

/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
