//! Core types for Cafenet.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod price;
pub mod role;

pub use catalog::{BillingPackage, Product, ProductCategory, RoomType};
pub use id::*;
pub use price::Price;
pub use role::Role;
