//! Request guards applied inside handlers.
//!
//! `auth` holds the bearer token guard and the per-resource permission policy.

pub mod auth;

#[cfg(test)]
mod test;
