//! Shared types for the Savannah restaurant platform
//!
//! Code used on both sides of the wire: the client-side cart store and the
//! tolerant price-string parsing that menu display prices go through.

pub mod cart;
pub mod price;

// Re-exports
pub use cart::{CartBackend, CartEntry, CartStore, FileCartBackend, MemoryCartBackend};
pub use price::{format_price, parse_price};
