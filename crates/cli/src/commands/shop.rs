//! Customer dashboard views: billing status, shop, cart, and checkout.

use std::collections::HashMap;

use cafenet_core::{Cart, Product, ProductCategory, ProductId, Role};

use super::{CommandError, Context};
use crate::render;

/// Show the customer's active billing session, if any.
///
/// # Errors
///
/// Returns an error if the caller is not a customer or the fetch fails.
pub async fn status(context: &Context) -> Result<(), CommandError> {
    let session = context.require(&[Role::Customer])?;

    let snapshots = context.client.list_billing(session.id, true).await?;
    match snapshots.first() {
        Some(billing) => {
            println!("Package:        {}", billing.package);
            println!("Remaining time: {} hours", billing.remaining_hours);
            println!("Room:           {}", billing.room_id);
        }
        None => println!("No active billing"),
    }
    Ok(())
}

/// Browse one menu tab of the shop.
///
/// # Errors
///
/// Returns an error if the caller is not a customer or the fetch fails.
pub async fn products(
    context: &Context,
    category: ProductCategory,
) -> Result<(), CommandError> {
    context.require(&[Role::Customer])?;

    let products = context.client.list_products(category).await?;
    if products.is_empty() {
        println!("No products in {category}");
    } else {
        println!("{}", render::products(&products));
    }
    Ok(())
}

/// Build a cart from product ids, print it, and check out.
///
/// Repeated ids merge into one line with a higher quantity. The checkout
/// payload is captured from the cart before the request is dispatched.
///
/// # Errors
///
/// Returns an error if the caller is not a customer, an id matches no
/// product, or the checkout fails.
pub async fn order(context: &Context, items: &[i64]) -> Result<(), CommandError> {
    let session = context.require(&[Role::Customer])?;

    let catalog = load_catalog(context).await?;

    let mut cart = Cart::new();
    for raw in items {
        let product = catalog
            .get(&ProductId::new(*raw))
            .ok_or(CommandError::UnknownProduct(*raw))?;
        cart.add(product);
    }

    println!("{}", render::cart(&cart));
    println!("Total: {}", cart.total());

    let payload = cart.to_checkout_items();
    let receipt = context.client.checkout(session.id, &payload).await?;

    println!("\nPayment code: {}", receipt.payment_code);
    println!("Total due:    {}", receipt.total);
    Ok(())
}

/// Fetch every menu tab and index the products by id.
///
/// The backend only exposes per-category listings, so resolving ids
/// means walking all three tabs.
async fn load_catalog(context: &Context) -> Result<HashMap<ProductId, Product>, CommandError> {
    let mut catalog = HashMap::new();
    for category in ProductCategory::ALL {
        for product in context.client.list_products(category).await? {
            catalog.insert(product.id, product);
        }
    }
    Ok(catalog)
}
