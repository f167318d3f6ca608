use super::*;

#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keep = factory::create_user_with_groups(db, "erin", &[]).await?;
    let gone = factory::create_user_with_groups(db, "frank", &[]).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(gone.id).await?;

    assert!(deleted);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(99).await?;

    assert!(!deleted);

    Ok(())
}
