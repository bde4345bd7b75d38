//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen action        Repository call            SQL                    │
//! │  ─────────────        ───────────────            ───                    │
//! │  Add                  insert(&NewProduct)        INSERT ... RETURNING   │
//! │  (refresh)            list()                     SELECT ... ORDER BY id │
//! │  Edit                 update_stock(id, update)   UPDATE ... WHERE id    │
//! │  Delete               delete(id)                 DELETE ... WHERE id    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is one autocommitted statement.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, Product, StockUpdate};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in natural store order (by id).
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price_cents, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price_cents, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// The stored product with its generated id and timestamps.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, quantity = product.quantity, "Inserting product");

        let now = Utc::now();

        let inserted = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity, price_cents, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, name, quantity, price_cents, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price.cents())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Replaces the quantity and price of one product.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly that row was updated
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn update_stock(&self, id: i64, update: &StockUpdate) -> DbResult<()> {
        debug!(id = id, quantity = update.quantity, "Updating product stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET quantity = ?2,
                price_cents = ?3,
                updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(update.quantity)
        .bind(update.price.cents())
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product row.
    ///
    /// The id is never handed out again (AUTOINCREMENT).
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use stockroom_core::{Money, NewProduct, StockUpdate};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn widget(name: &str, quantity: i64, cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity,
            price: Money::from_cents(cents),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let db = db().await;
        let repo = db.products();

        let inserted = repo.insert(&widget("Widget", 10, 250)).await.unwrap();
        assert!(inserted.id > 0);

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, inserted.id);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].quantity, 10);
        assert_eq!(products[0].price(), Money::from_cents(250));
    }

    #[tokio::test]
    async fn test_update_touches_only_target_row() {
        let db = db().await;
        let repo = db.products();

        let a = repo.insert(&widget("A", 1, 100)).await.unwrap();
        let b = repo.insert(&widget("B", 2, 200)).await.unwrap();

        let update = StockUpdate {
            quantity: 9,
            price: Money::from_cents(999),
        };
        repo.update_stock(a.id, &update).await.unwrap();

        let a = repo.get_by_id(a.id).await.unwrap().unwrap();
        let b_after = repo.get_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a.quantity, 9);
        assert_eq!(a.price_cents, 999);
        assert_eq!(b_after, b);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let db = db().await;
        let update = StockUpdate {
            quantity: 1,
            price: Money::zero(),
        };
        let err = db.products().update_stock(404, &update).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_and_ids_not_reused() {
        let db = db().await;
        let repo = db.products();

        let first = repo.insert(&widget("A", 1, 100)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        assert!(repo.get_by_id(first.id).await.unwrap().is_none());

        let second = repo.insert(&widget("B", 1, 100)).await.unwrap();
        assert!(second.id > first.id);

        let err = repo.delete(first.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_rejects_negative_quantity() {
        let db = db().await;
        let err = db
            .products()
            .insert(&widget("Broken", -1, 100))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}
