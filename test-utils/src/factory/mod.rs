//! Row factories with defaults that satisfy every constraint.
//!
//! Builders (`MemberFactory`, `LedgerEntryFactory`, ...) override single columns;
//! `create_*` functions insert a row with defaults only. A factory whose row needs a
//! parent takes the parent's ID; `helpers` creates the parent too.
//!
//! ```rust,ignore
//! let expense = factory::ledger_entry::LedgerEntryFactory::new(db)
//!     .expense()
//!     .amount(250.0)
//!     .build()
//!     .await?;
//! let member = factory::create_member(db).await?;
//! ```

pub mod attendance;
pub mod helpers;
pub mod ledger_entry;
pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod user;

pub use attendance::create_attendance;
pub use ledger_entry::{create_expense, create_income};
pub use member::create_member;
pub use membership_plan::create_plan;
pub use payment::create_payment;
pub use user::create_user;
