//! Carts

pub mod errors;
pub mod models;
pub mod pricing;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
