use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs, then opens a database with them.
///
/// Foreign keys are enforced, so a table must be added after the tables it references:
/// plans before members, members before payments and attendance.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_membership_tables().build().await?;
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

    /// Adds the table of one SeaORM entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Plans, members, payments and attendance: enough for renewal and check-ins.
    pub fn with_membership_tables(self) -> Self {
        self.with_table(MembershipPlan)
            .with_table(Member)
            .with_table(Payment)
            .with_table(Attendance)
    }

    /// The whole schema, for tests that drive the router with authenticated requests.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_membership_tables()
            .with_table(LedgerEntry)
    }

    /// Opens the in-memory database and creates the collected tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use context
    /// - `Err(TestError::Database)` - Database could not be opened or a table not created
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::connect(self.tables).await
    }
}
