//! HTTP handlers.
//!
//! Each handler authorizes the caller against the resource policy, converts the request
//! DTO into domain params, calls the service and converts the result back into a DTO.

pub mod attendance;
pub mod auth;
pub mod device_mode;
pub mod ledger;
pub mod member;
pub mod membership;
pub mod payment;

#[cfg(test)]
mod test;
