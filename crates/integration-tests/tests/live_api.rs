//! Live-API tests against a running cafenet backend.
//!
//! See the crate docs for the required environment and seed data.

use secrecy::SecretString;

use cafenet_core::{Cart, ProductCategory, Role};
use cafenet_integration_tests::{login_as, test_client};

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running cafenet backend with seeded accounts"]
async fn test_admin_login_returns_admin_session() {
    let client = test_client();
    let session = login_as(&client, "CAFENET_TEST_ADMIN").await;

    assert_eq!(session.role, Role::Admin);
    assert!(!session.name.is_empty());
}

#[tokio::test]
#[ignore = "Requires a running cafenet backend"]
async fn test_login_rejects_bad_credentials() {
    let client = test_client();
    let password = SecretString::from("definitely-wrong".to_string());

    let err = client
        .login("no-such-user", &password)
        .await
        .expect_err("bogus credentials must not log in");
    assert!(matches!(
        err,
        cafenet_client::ApiError::InvalidCredentials
    ));
}

// ============================================================================
// Admin dashboard
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running cafenet backend with seeded accounts"]
async fn test_admin_overview_counters_match_tables() {
    let client = test_client();
    login_as(&client, "CAFENET_TEST_ADMIN").await;

    let overview = client.admin_overview().await.expect("overview fetch failed");

    // Counters on the dashboard cards are derived from the same tables.
    let free = overview
        .rooms
        .iter()
        .filter(|room| !room.is_occupied)
        .count();
    let advertised = overview.available_rooms.regular + overview.available_rooms.premium;
    assert_eq!(free, advertised as usize);
}

#[tokio::test]
#[ignore = "Requires a running cafenet backend"]
async fn test_room_listing_has_distinct_names() {
    let client = test_client();
    let rooms = client.list_rooms().await.expect("room fetch failed");

    let mut names: Vec<&str> = rooms.iter().map(|room| room.name.as_str()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(names.len(), before, "room names must be unique");
}

// ============================================================================
// Customer shop flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running cafenet backend"]
async fn test_products_listed_per_category() {
    let client = test_client();

    for category in ProductCategory::ALL {
        let products = client
            .list_products(category)
            .await
            .expect("product fetch failed");
        for product in products {
            assert_eq!(product.category, category);
            assert!(product.price.amount() > 0);
        }
    }
}

#[tokio::test]
#[ignore = "Requires a running cafenet backend with seeded accounts"]
async fn test_shop_order_flow_round_trips_cart_total() {
    let client = test_client();
    let session = login_as(&client, "CAFENET_TEST_CUSTOMER").await;

    let products = client
        .list_products(ProductCategory::Makanan)
        .await
        .expect("product fetch failed");
    let first = products.first().expect("seed data must include food");

    let mut cart = Cart::new();
    cart.add(first);
    cart.add(first);

    let receipt = client
        .checkout(session.id, &cart.to_checkout_items())
        .await
        .expect("checkout failed");

    assert!(!receipt.payment_code.is_empty());
    assert_eq!(receipt.total, cart.total());
}

#[tokio::test]
#[ignore = "Requires a running cafenet backend with seeded accounts"]
async fn test_customer_billing_status() {
    let client = test_client();
    let session = login_as(&client, "CAFENET_TEST_CUSTOMER").await;

    let snapshots = client
        .list_billing(session.id, true)
        .await
        .expect("billing fetch failed");

    // The seeded customer has one active session.
    let active = snapshots.first().expect("seeded billing session missing");
    assert!(active.remaining_hours >= 1);
}
