//! Core types for LUMINA.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod email;
pub mod line_item;

pub use color::{ColorId, ColorVariant, UnknownColor};
pub use email::{Email, EmailError};
pub use line_item::{LineItem, PRODUCT_NAME, Quantity, QuantityError};
