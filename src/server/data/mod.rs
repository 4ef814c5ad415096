//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Repositories that take part in the renewal transaction are generic over
//! `ConnectionTrait` so they accept either the pool or an open `DatabaseTransaction`.

pub mod attendance;
pub mod ledger;
pub mod member;
pub mod membership;
pub mod payment;
pub mod user;

#[cfg(test)]
mod test;
