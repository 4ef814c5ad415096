//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step writes such as membership renewal

pub mod attendance;
pub mod auth;
pub mod device_mode;
pub mod ledger;
pub mod member;
pub mod membership;
pub mod payment;
pub mod receipt;
pub mod report;

#[cfg(test)]
mod test;
