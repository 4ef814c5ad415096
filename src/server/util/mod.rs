//! Small helpers shared across layers.

pub mod pagination;
pub mod password;
