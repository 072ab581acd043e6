//! HTTP API for the storefront admin backend.
//!
//! Exposes the product catalog, the hero-slide carousel (with its ordered
//! collection semantics), and image upload endpoints. The router builder
//! lives in [`router`] so the binary and the integration tests share the
//! exact same middleware stack.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
