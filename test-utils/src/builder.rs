use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Configures an in-memory SQLite database for a test.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a CREATE TABLE generated from `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every table the roster uses.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}
