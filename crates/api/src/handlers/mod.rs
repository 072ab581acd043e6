//! Request handlers, one module per resource.

pub mod hero_slides;
pub mod products;
pub mod upload;
