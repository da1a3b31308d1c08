//! Cafenet Client - typed access to the cafenet backend.
//!
//! Everything the browser front-end did besides rendering lives here:
//!
//! - [`session`] - the persisted login identity (save/load/clear)
//! - [`guard`] - pure render-vs-redirect decisions for role-gated views
//! - [`api`] - one `reqwest` wrapper per backend resource
//! - [`config`] - environment configuration
//! - [`error`] - the failure taxonomy shared by the above
//!
//! The session is always an explicit value passed into [`guard::authorize`]
//! and the API methods, never an ambient global lookup.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;

pub use api::CafenetClient;
pub use api::types::{
    AdminOverview, AvailableRooms, BillingReceipt, BillingSnapshot, CheckoutReceipt, Room,
    TransactionSummary, UserSummary,
};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, SessionError};
pub use guard::{Access, Route, authorize, landing};
pub use session::{Session, SessionStore};
