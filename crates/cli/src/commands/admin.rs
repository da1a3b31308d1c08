//! Admin dashboard views.

use cafenet_core::Role;

use super::{CommandError, Context};
use crate::render;

/// Render the admin overview: counters plus customer, staff,
/// transaction, and room tables.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the fetch fails.
pub async fn overview(context: &Context) -> Result<(), CommandError> {
    context.require(&[Role::Admin])?;

    let overview = context.client.admin_overview().await?;

    println!(
        "Customers: {}   Staff: {}   Free rooms: {} regular, {} premium",
        overview.customers.len(),
        overview.staff.len(),
        overview.available_rooms.regular,
        overview.available_rooms.premium,
    );

    println!("\nCustomer accounts");
    println!("{}", render::users(&overview.customers));

    println!("\nStaff accounts");
    println!("{}", render::users(&overview.staff));

    println!("\nRecent transactions");
    println!("{}", render::transactions(&overview.recent));

    println!("\nRooms");
    println!("{}", render::rooms(&overview.rooms));

    Ok(())
}
