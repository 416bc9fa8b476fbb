//! Products domain module.
//!
//! This crate contains the storefront catalog and its search filter,
//! implemented purely as deterministic domain logic (no IO, no rendering).

pub mod catalog;
pub mod product;
pub mod search;

pub use catalog::Catalog;
pub use product::{Price, Product};
pub use search::{SearchQuery, filter};
