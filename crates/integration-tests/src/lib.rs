//! Integration tests for Cafenet.
//!
//! # Running Tests
//!
//! The tests in `tests/` talk to a real backend and are `#[ignore]`d by
//! default:
//!
//! ```bash
//! # Point at a running backend with seeded accounts
//! export CAFENET_API_URL=http://localhost:8000
//! export CAFENET_TEST_ADMIN=admin:admin123
//! export CAFENET_TEST_CUSTOMER=budi:budi123
//!
//! cargo test -p cafenet-integration-tests -- --ignored
//! ```
//!
//! Seeded accounts must exist for every role named above; the customer
//! account needs an active billing session for the status test to see
//! one.

use secrecy::SecretString;

use cafenet_client::{CafenetClient, ClientConfig, Session};

/// Build a client from the environment, with the library defaults.
///
/// # Panics
///
/// Panics if configuration is invalid; tests cannot proceed without it.
#[must_use]
pub fn test_client() -> CafenetClient {
    let config = ClientConfig::from_env().expect("invalid test configuration");
    CafenetClient::new(&config).expect("failed to build client")
}

/// Read a `username:password` credential pair from `var`.
///
/// # Panics
///
/// Panics if the variable is missing or not `username:password`.
#[must_use]
pub fn credentials(var: &str) -> (String, SecretString) {
    let raw = std::env::var(var)
        .unwrap_or_else(|_| panic!("set {var} to username:password for this test"));
    let (username, password) = raw
        .split_once(':')
        .unwrap_or_else(|| panic!("{var} must be username:password"));
    (username.to_string(), SecretString::from(password.to_string()))
}

/// Log in with the credential pair stored in `var`.
///
/// # Panics
///
/// Panics if login fails; the backend seed is a test precondition.
pub async fn login_as(client: &CafenetClient, var: &str) -> Session {
    let (username, password) = credentials(var);
    client
        .login(&username, &password)
        .await
        .unwrap_or_else(|e| panic!("login with {var} credentials failed: {e}"))
}
