//! Response and request records for the cafenet backend.
//!
//! These mirror the backend's JSON shapes one-to-one; the client never
//! reshapes a response beyond decoding it into these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafenet_core::{
    BillingId, BillingPackage, CheckoutItem, Price, RoomId, RoomType, UserId,
};

/// Row of the admin and staff user tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub username: String,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub room_type: RoomType,
    pub is_occupied: bool,
}

/// Confirmation for a created billing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingReceipt {
    pub id: BillingId,
    pub customer_id: UserId,
    pub room_id: RoomId,
    pub package: BillingPackage,
    pub duration_hours: u32,
}

/// Read-only projection of a billing session's server state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSnapshot {
    pub package: BillingPackage,
    pub remaining_hours: u32,
    pub room_id: RoomId,
}

/// One settled transaction row on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub created_at: DateTime<Utc>,
    pub total: Price,
    pub payment_code: String,
}

/// Available-room counters per room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRooms {
    pub regular: u32,
    pub premium: u32,
}

/// Aggregate payload behind the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub customers: Vec<UserSummary>,
    pub staff: Vec<UserSummary>,
    pub available_rooms: AvailableRooms,
    pub recent: Vec<TransactionSummary>,
    pub rooms: Vec<Room>,
}

/// Checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub payment_code: String,
    pub total: Price,
}

/// `POST /auth/login` body.
///
/// No `Debug` derive: the password must never end up in logs.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /billing` body.
#[derive(Debug, Serialize)]
pub(crate) struct BillingRequest {
    pub customer_id: UserId,
    pub room_id: RoomId,
    pub package: BillingPackage,
    pub duration_hours: u32,
}

/// `POST /checkout` body.
#[derive(Debug, Serialize)]
pub(crate) struct CheckoutRequest<'a> {
    pub customer_id: UserId,
    pub items: &'a [CheckoutItem],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_overview_decodes_backend_shape() {
        let overview: AdminOverview = serde_json::from_str(
            r#"{
                "customers": [{"id": 3, "name": "Budi", "username": "budi"}],
                "staff": [{"id": 2, "name": "Sari", "username": "sari"}],
                "available_rooms": {"regular": 4, "premium": 1},
                "recent": [
                    {"created_at": "2024-05-01T10:30:00Z", "total": 45000, "payment_code": "PAY-8F2K"}
                ],
                "rooms": [
                    {"id": 1, "name": "R-01", "room_type": "regular", "is_occupied": false},
                    {"id": 2, "name": "P-01", "room_type": "premium", "is_occupied": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(overview.customers.len(), 1);
        assert_eq!(overview.available_rooms.premium, 1);
        assert_eq!(overview.recent[0].total, Price::new(45_000));
        assert_eq!(overview.rooms[1].room_type, RoomType::Premium);
        assert!(overview.rooms[1].is_occupied);
    }

    #[test]
    fn test_billing_request_wire_shape() {
        let request = BillingRequest {
            customer_id: UserId::new(3),
            room_id: RoomId::new(2),
            package: BillingPackage::Premium,
            duration_hours: 2,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"customer_id":3,"room_id":2,"package":"premium","duration_hours":2}"#
        );
    }

    #[test]
    fn test_checkout_request_wire_shape() {
        let items = [CheckoutItem {
            product_id: cafenet_core::ProductId::new(1),
            quantity: 2,
        }];
        let request = CheckoutRequest {
            customer_id: UserId::new(3),
            items: &items,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"customer_id":3,"items":[{"product_id":1,"qty":2}]}"#
        );
    }
}
