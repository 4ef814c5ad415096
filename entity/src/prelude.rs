pub use super::attendance::Entity as Attendance;
pub use super::ledger_entry::Entity as LedgerEntry;
pub use super::member::Entity as Member;
pub use super::membership_plan::Entity as MembershipPlan;
pub use super::payment::Entity as Payment;
pub use super::user::Entity as User;
