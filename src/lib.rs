//! Brasserie
//!
//! Brasserie is the client-side state core for the Brasserie restaurant
//! storefront: a shopping cart and a table-booking log held in a local
//! key-value store, with a derived cart badge and a notification
//! collaborator for user feedback.

pub mod config;
pub mod domain;
pub mod notify;
pub mod storage;
