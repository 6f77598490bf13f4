//! CLI command implementations.

pub mod basket;
