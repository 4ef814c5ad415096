use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Everything one test needs: a private in-memory SQLite database with its tables.
///
/// Every context opens its own `sqlite::memory:` connection, so tests never see each
/// other's rows and can run in parallel.
pub struct TestContext {
    /// `None` only for a context built by hand with `TestContext::default()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database and creates the given tables in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context with every table created
    /// - `Err(TestError::Database)` - Connection or a CREATE TABLE statement failed
    pub async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db: Some(db) })
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self { db: None }
    }
}
