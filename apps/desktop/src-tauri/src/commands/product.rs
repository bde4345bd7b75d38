//! # Product Operations
//!
//! Add, list, edit and delete products against the store. The Tauri
//! commands in `inventory.rs` call these.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command           Input                      Store call               │
//! │  ───────           ─────                      ──────────               │
//! │  add_product       form text (name/qty/price) insert                   │
//! │  list_products     -                          list                     │
//! │  edit_product      product id + dialog values update_stock + get_by_id │
//! │  delete_product    product id                 delete                   │
//! │  count_products    -                          count                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use stockroom_core::{
    validation::{parse_new_product, parse_stock_update},
    CoreError, Product,
};

/// Result of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The row was updated; holds the stored values.
    Updated(Product),

    /// The edit dialog was dismissed; nothing changed.
    Cancelled,
}

/// Adds a product from the three form inputs.
///
/// ## Errors
/// * `ValidationError` - bad quantity, bad price, or empty name (checked in
///   that order)
pub async fn add_product(
    db: &DbState,
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<Product, ApiError> {
    debug!(name = %name, quantity = %quantity, price = %price, "add_product command");

    let new_product = parse_new_product(name, quantity, price)?;
    let product = db.inner().products().insert(&new_product).await?;

    info!(
        id = product.id,
        name = %product.name,
        quantity = product.quantity,
        low_stock = product.is_low_stock(),
        "Product added"
    );
    Ok(product)
}

/// Lists all products in store order.
pub async fn list_products(db: &DbState) -> Result<Vec<Product>, ApiError> {
    let products = db.inner().products().list().await?;
    debug!(count = products.len(), "list_products command");
    Ok(products)
}

/// Replaces quantity and price of one product.
///
/// `None` for either value means the edit dialog was cancelled, and the edit is a
/// no-op.
///
/// ## Errors
/// * `ValidationError` - a value does not parse
/// * `SelectionError` - the product no longer exists
pub async fn edit_product(
    db: &DbState,
    id: i64,
    quantity: Option<&str>,
    price: Option<&str>,
) -> Result<EditOutcome, ApiError> {
    let (Some(quantity), Some(price)) = (quantity, price) else {
        debug!(id = id, "edit_product cancelled");
        return Ok(EditOutcome::Cancelled);
    };

    debug!(id = id, quantity = %quantity, price = %price, "edit_product command");

    let update = parse_stock_update(quantity, price)?;
    db.inner().products().update_stock(id, &update).await?;

    let product = db
        .inner()
        .products()
        .get_by_id(id)
        .await?
        .ok_or(CoreError::ProductNotFound(id))?;

    info!(id = id, quantity = product.quantity, "Product updated");
    Ok(EditOutcome::Updated(product))
}

/// Deletes one product.
///
/// ## Errors
/// * `SelectionError` - the product no longer exists (store unchanged)
pub async fn delete_product(db: &DbState, id: i64) -> Result<(), ApiError> {
    debug!(id = id, "delete_product command");

    db.inner().products().delete(id).await?;

    info!(id = id, "Product deleted");
    Ok(())
}

/// Counts stored products.
pub async fn count_products(db: &DbState) -> Result<i64, ApiError> {
    Ok(db.inner().products().count().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::Money;
    use stockroom_db::{Database, DbConfig};

    async fn db() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let db = db().await;

        let added = add_product(&db, "Widget", "10", "2.50").await.unwrap();

        let products = list_products(&db).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, added.id);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].quantity, 10);
        assert_eq!(products[0].price(), Money::from_cents(250));
    }

    #[tokio::test]
    async fn test_add_trims_name() {
        let db = db().await;
        let added = add_product(&db, "  Widget  ", "1", "1").await.unwrap();
        assert_eq!(added.name, "Widget");
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input() {
        let db = db().await;

        let cases = [
            ("", "10", "2.50"),
            ("   ", "10", "2.50"),
            ("Widget", "ten", "2.50"),
            ("Widget", "-1", "2.50"),
            ("Widget", "10", "abc"),
            ("Widget", "10", "-2.50"),
            ("Widget", "10", "2.5.0"),
        ];

        for (name, quantity, price) in cases {
            let err = add_product(&db, name, quantity, price).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{name:?} {quantity:?} {price:?}");
        }

        assert_eq!(count_products(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_rounds_price_to_cents() {
        let db = db().await;

        let a = add_product(&db, "A", "1", "2.505").await.unwrap();
        let b = add_product(&db, "B", "1", "2.499999").await.unwrap();
        let c = add_product(&db, "C", "1", "1e2").await.unwrap();

        assert_eq!(a.price_cents, 251);
        assert_eq!(b.price_cents, 250);
        assert_eq!(c.price_cents, 10_000);
    }

    #[tokio::test]
    async fn test_add_reports_number_before_name() {
        let db = db().await;
        let err = add_product(&db, "", "ten", "2.50").await.unwrap_err();
        assert!(err.message.contains("quantity"));
    }

    #[tokio::test]
    async fn test_edit_updates_only_that_row() {
        let db = db().await;
        let a = add_product(&db, "A", "1", "1.00").await.unwrap();
        let b = add_product(&db, "B", "2", "2.00").await.unwrap();

        let outcome = edit_product(&db, a.id, Some("7"), Some("3.25")).await.unwrap();
        let EditOutcome::Updated(updated) = outcome else {
            panic!("expected update");
        };
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.price_cents, 325);
        assert_eq!(updated.name, "A");

        let products = list_products(&db).await.unwrap();
        assert_eq!(products[1], b);
    }

    #[tokio::test]
    async fn test_edit_cancelled_is_noop() {
        let db = db().await;
        let a = add_product(&db, "A", "1", "1.00").await.unwrap();

        assert_eq!(
            edit_product(&db, a.id, None, Some("3")).await.unwrap(),
            EditOutcome::Cancelled
        );
        assert_eq!(
            edit_product(&db, a.id, Some("3"), None).await.unwrap(),
            EditOutcome::Cancelled
        );

        assert_eq!(list_products(&db).await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn test_edit_invalid_values() {
        let db = db().await;
        let a = add_product(&db, "A", "1", "1.00").await.unwrap();

        let err = edit_product(&db, a.id, Some("many"), Some("1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_products(&db).await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn test_edit_missing_product() {
        let db = db().await;
        let err = edit_product(&db, 42, Some("1"), Some("1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SelectionError);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = db().await;
        let a = add_product(&db, "A", "1", "1.00").await.unwrap();
        let b = add_product(&db, "B", "2", "2.00").await.unwrap();

        delete_product(&db, a.id).await.unwrap();
        assert_eq!(list_products(&db).await.unwrap(), vec![b.clone()]);

        let err = delete_product(&db, a.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(list_products(&db).await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn test_closed_store_is_store_error() {
        let db = db().await;
        db.close().await;

        let err = list_products(&db).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreError);
    }
}
