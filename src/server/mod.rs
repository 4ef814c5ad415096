//! Gym back end: HTTP API, business rules and persistence.
//!
//! # Layers
//!
//! - `controller/` turns HTTP requests into service calls and domain results into DTOs
//! - `middleware/` authenticates bearer tokens and applies the permission policy
//! - `service/` holds the business rules: renewal, counters, reports, receipts
//! - `data/` runs SeaORM queries and converts entities into domain models
//! - `model/` defines domain models and operation parameters
//! - `error/` maps every failure onto a status code and `ErrorDto`
//!
//! # Wiring
//!
//! `config` reads the environment, `startup` migrates the database and creates the
//! bootstrap admin, `state` carries shared handles, `router` registers every route and
//! the OpenAPI document, and `scheduler/` runs the nightly membership expiry.
//! `util/` has pagination links and password hashing.
//!
//! A request flows router → controller (guard, DTO → params) → service → data, and back
//! out as a DTO.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
