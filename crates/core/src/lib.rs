//! Domain logic for the storefront admin backend.
//!
//! This crate has no internal dependencies so it can be used by the API,
//! the repository layer, and the Telegram bot alike. It holds the error
//! taxonomy, pure validation, the hero-slide ordering rules, catalog
//! filter/pagination helpers, upload constraints, and the structured
//! product-message parser.

pub mod catalog;
pub mod error;
pub mod ordering;
pub mod product_message;
pub mod types;
pub mod upload;
pub mod validation;
