use super::*;

#[tokio::test]
async fn replaces_username_and_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_groups(db, "dave", &["guest"]).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParam {
            id: created.id,
            username: "david".to_string(),
            groups: vec!["staff".to_string()],
        })
        .await?
        .expect("user should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, "david");
    assert_eq!(updated.groups, vec!["staff"]);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParam {
            id: 42,
            username: "ghost".to_string(),
            groups: Vec::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
