//! `storefront-web`
//!
//! **Responsibility:** the single-page storefront: catalog search, per-card
//! likes and a cosmetic login toggle in front of the checkout panel.
//!
//! This crate provides:
//! - Page state and its transitions, independent of any renderer
//! - Explicit configuration passed into view construction
//! - The Leptos view tree and its wasm entry point
//!
//! Nothing here persists; reloading the page starts over.

pub mod config;
pub mod session;
pub mod state;
pub mod style;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::StorefrontConfig;
pub use session::{CheckoutAccess, GateError, SessionGate};
pub use state::StorefrontState;
pub use types::Theme;
