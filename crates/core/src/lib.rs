//! LUMINA Core - Shared types library.
//!
//! This crate provides common types used across all LUMINA components:
//! - `storefront` - Server-rendered site with the basket and product page
//! - `cli` - Command-line tools for inspecting and editing the stored basket
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Colour variants, line items, quantities and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
