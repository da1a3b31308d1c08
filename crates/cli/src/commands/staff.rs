//! Staff dashboard views: the billing form and its side tables.
//!
//! Admins reach the billing form through a dashboard shortcut in the
//! original UI, so these commands allow both roles.

use cafenet_core::{BillingPackage, Role, RoomId, UserId};

use super::{CommandError, Context};
use crate::render;

const ALLOWED: &[Role] = &[Role::Admin, Role::Staff];

/// Open a billing session for a customer in a room.
///
/// # Errors
///
/// Returns an error if the caller is not staff/admin, the duration is
/// below 1 hour, or the request fails.
pub async fn create_billing(
    context: &Context,
    customer: i64,
    room: i64,
    package: BillingPackage,
    hours: u32,
) -> Result<(), CommandError> {
    context.require(ALLOWED)?;

    let receipt = context
        .client
        .create_billing(UserId::new(customer), RoomId::new(room), package, hours)
        .await?;

    println!(
        "Billing #{} created: customer {} in room {} ({}, {} hours)",
        receipt.id, receipt.customer_id, receipt.room_id, receipt.package, receipt.duration_hours,
    );
    Ok(())
}

/// List rooms that are free to bill.
///
/// # Errors
///
/// Returns an error if the caller is not staff/admin or the fetch fails.
pub async fn rooms(context: &Context) -> Result<(), CommandError> {
    context.require(ALLOWED)?;

    let rooms = context.client.list_rooms().await?;
    let free: Vec<_> = rooms.into_iter().filter(|room| !room.is_occupied).collect();

    if free.is_empty() {
        println!("No free rooms");
    } else {
        println!("{}", render::rooms(&free));
    }
    Ok(())
}

/// List customer accounts, as shown beside the billing form.
///
/// # Errors
///
/// Returns an error if the caller is not staff/admin or the fetch fails.
pub async fn customers(context: &Context) -> Result<(), CommandError> {
    context.require(ALLOWED)?;

    let customers = context.client.list_users(Role::Customer).await?;
    println!("{}", render::users(&customers));
    Ok(())
}
