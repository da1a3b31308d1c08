//! HTTP client for the cafenet backend.
//!
//! One method per backend resource. Every call is single-shot: no retry,
//! no caching; the per-request timeout from [`ClientConfig`] is the only
//! resilience applied. The status is checked before the body is parsed,
//! so transport failures ([`ApiError::Network`]), non-2xx responses
//! ([`ApiError::Server`]), and undecodable bodies ([`ApiError::Parse`])
//! stay distinguishable to callers.

pub mod types;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use cafenet_core::{
    BillingPackage, CheckoutItem, Product, ProductCategory, Role, RoomId, UserId,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

use types::{
    AdminOverview, BillingReceipt, BillingRequest, BillingSnapshot, CheckoutReceipt,
    CheckoutRequest, LoginRequest, Room, UserSummary,
};

/// Client for the cafenet backend API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CafenetClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    api_url: String,
}

impl CafenetClient {
    /// Create a new client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_url: config.api_url.clone(),
            }),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.api_url)
    }

    /// Check the status, then decode the body.
    ///
    /// The body is read as text first so a non-2xx response maps to
    /// [`ApiError::Server`] without ever being parsed.
    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "backend returned non-success status");
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.inner.http.post(self.url(path)).json(body).send().await?;
        Self::read_response(response).await
    }

    /// Authenticate and return the session identity.
    ///
    /// # Errors
    ///
    /// Any non-2xx status collapses to [`ApiError::InvalidCredentials`];
    /// the server's error detail is discarded on purpose so callers can
    /// only show a generic message.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Session, ApiError> {
        let body = LoginRequest {
            username,
            password: password.expose_secret(),
        };
        let response = self
            .inner
            .http
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "login rejected");
            return Err(ApiError::InvalidCredentials);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the aggregate payload behind the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn admin_overview(&self) -> Result<AdminOverview, ApiError> {
        self.get("/admin/overview", &[]).await
    }

    /// List user accounts with the given role.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self, role: Role) -> Result<Vec<UserSummary>, ApiError> {
        self.get("/users", &[("role", role.to_string())]).await
    }

    /// List all rooms, occupied or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get("/rooms", &[]).await
    }

    /// Open a billing session for a customer in a room.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without dispatching anything if
    /// `duration_hours` is below 1; otherwise errors if the request or
    /// decoding fails.
    #[instrument(skip(self))]
    pub async fn create_billing(
        &self,
        customer_id: UserId,
        room_id: RoomId,
        package: BillingPackage,
        duration_hours: u32,
    ) -> Result<BillingReceipt, ApiError> {
        if duration_hours < 1 {
            return Err(ApiError::Validation(
                "billing duration must be at least 1 hour".to_string(),
            ));
        }
        let body = BillingRequest {
            customer_id,
            room_id,
            package,
            duration_hours,
        };
        self.post("/billing", &body).await
    }

    /// List billing sessions for a customer.
    #[instrument(skip(self))]
    pub async fn list_billing(
        &self,
        customer_id: UserId,
        active_only: bool,
    ) -> Result<Vec<BillingSnapshot>, ApiError> {
        self.get(
            "/billing",
            &[
                ("customer_id", customer_id.to_string()),
                ("active", active_only.to_string()),
            ],
        )
        .await
    }

    /// List shop products in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: ProductCategory,
    ) -> Result<Vec<Product>, ApiError> {
        self.get("/products", &[("category", category.to_string())])
            .await
    }

    /// Submit a checkout for the given cart items.
    ///
    /// The items slice is the payload as captured by the caller; nothing
    /// added to a cart after this call can alter it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without dispatching anything if
    /// `items` is empty; otherwise errors if the request or decoding
    /// fails.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn checkout(
        &self,
        customer_id: UserId,
        items: &[CheckoutItem],
    ) -> Result<CheckoutReceipt, ApiError> {
        if items.is_empty() {
            return Err(ApiError::Validation("cart is empty".to_string()));
        }
        let body = CheckoutRequest {
            customer_id,
            items,
        };
        self.post("/checkout", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A client whose URL would fail instantly if anything were sent.
    /// Validation must reject before any socket is touched.
    fn offline_client() -> CafenetClient {
        let config = ClientConfig {
            api_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
            session_file: std::env::temp_dir().join("cafenet-test-session.json"),
        };
        CafenetClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart_before_dispatch() {
        let client = offline_client();
        let err = client.checkout(UserId::new(1), &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_create_billing_rejects_zero_hours_before_dispatch() {
        let client = offline_client();
        let err = client
            .create_billing(
                UserId::new(1),
                RoomId::new(1),
                BillingPackage::Regular,
                0,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let client = offline_client();
        let err = client.list_rooms().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}
