//! Shared test scaffolding for the gym back end.
//!
//! `TestBuilder` opens a private in-memory SQLite database with just the tables a test
//! asks for, and `factory` fills it with rows that have sensible defaults.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn renews_member() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_membership_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (plan, member) = factory::helpers::create_member_with_plan(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
