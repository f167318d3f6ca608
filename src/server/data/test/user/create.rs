use super::*;
use sea_orm::EntityTrait;

/// Tests inserting a user with groups.
///
/// Expected: Ok with a generated id and the groups persisted in `data`
#[tokio::test]
async fn creates_user_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "carol".to_string(),
            groups: vec!["staff".to_string(), "ops".to_string()],
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "carol");
    assert_eq!(user.groups, vec!["staff", "ops"]);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .expect("row should exist");
    assert_eq!(
        stored.data,
        serde_json::json!({ "groups": ["staff", "ops"] })
    );

    Ok(())
}

/// Tests the unique constraint on username.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_groups(db, "carol", &[]).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "carol".to_string(),
            groups: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
