//! Cafenet Core - Shared types library.
//!
//! This crate provides common types used across all Cafenet components:
//! - `client` - Typed HTTP client, session store, and access guard
//! - `cli` - Role-gated dashboard commands
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, roles, and catalog enums
//! - [`cart`] - In-memory cart aggregation for the customer shop flow

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, CheckoutItem};
pub use types::*;
