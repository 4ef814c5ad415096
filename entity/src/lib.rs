//! SeaORM entity definitions for the gym back end.

pub mod prelude;

pub mod attendance;
pub mod ledger_entry;
pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod user;
