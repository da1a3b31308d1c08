//! Terminal table rendering for the dashboard views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use cafenet_client::{Room, TransactionSummary, UserSummary};
use cafenet_core::{Cart, Product};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
}

/// Customer/staff account table: name and username columns.
pub fn users(users: &[UserSummary]) -> String {
    let rows = users.iter().map(|user| UserRow {
        name: user.name.clone(),
        username: user.username.clone(),
    });
    styled(Table::new(rows))
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    room_type: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Room table with occupancy status.
pub fn rooms(rooms: &[Room]) -> String {
    let rows = rooms.iter().map(|room| RoomRow {
        name: room.name.clone(),
        room_type: room.room_type.to_string(),
        status: if room.is_occupied { "occupied" } else { "free" },
    });
    styled(Table::new(rows))
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Code")]
    code: String,
}

/// Recent-transaction table on the admin overview.
pub fn transactions(recent: &[TransactionSummary]) -> String {
    let rows = recent.iter().map(|tx| TransactionRow {
        time: tx.created_at.format("%Y-%m-%d %H:%M").to_string(),
        total: tx.total.to_string(),
        code: tx.payment_code.clone(),
    });
    styled(Table::new(rows))
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Product")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Shop product table for one menu tab.
pub fn products(products: &[Product]) -> String {
    let rows = products.iter().map(|product| ProductRow {
        id: product.id.as_i64(),
        title: product.title.clone(),
        price: product.price.to_string(),
        category: product.category.to_string(),
    });
    styled(Table::new(rows))
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Product")]
    title: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

/// Cart lines with per-line subtotals.
pub fn cart(cart: &Cart) -> String {
    let rows = cart.lines().iter().map(|line| CartRow {
        title: line.title.clone(),
        quantity: line.quantity,
        subtotal: line.subtotal().to_string(),
    });
    styled(Table::new(rows))
}

fn styled(mut table: Table) -> String {
    table.with(Style::sharp());
    table.to_string()
}
