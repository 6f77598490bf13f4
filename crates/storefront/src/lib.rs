//! LUMINA storefront library.
//!
//! Basket, product selector and header chrome for the LUMINA site, served
//! as server-rendered pages. The crate is split into the page model
//! ([`page`], [`basket`], [`view`], [`product`], [`chrome`], [`home`]), the
//! durable basket store ([`store`]) and the HTTP surface ([`routes`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod basket;
pub mod chrome;
pub mod config;
pub mod error;
pub mod filters;
pub mod home;
pub mod middleware;
pub mod newsletter;
pub mod page;
pub mod product;
pub mod routes;
pub mod state;
pub mod store;
pub mod view;
