//! Catalog domain module.
//!
//! This crate contains the product entity and its business rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The one
//! time-dependent operation takes an injected clock.

pub mod product;

pub use product::{Category, Product, validate_name};
