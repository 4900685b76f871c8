//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment backed by an in-memory SQLite database.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// let rol = test.security().insert_rol("Administrador").await?;
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it.
    ///
    /// Lets the main crate build its `AppState` without this crate depending on it.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
