//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Server-side domain models convert
//! into these at the controller boundary.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod device;
pub mod ledger;
pub mod member;
pub mod membership;
pub mod payment;
