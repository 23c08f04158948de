//! Database repository for CRUD operations.
//!
//! Every query touching a store-scoped entity filters by `store_id`, so a
//! record can never be read or written through the wrong tenant. Deletions
//! rely on the database's foreign keys: a delete that would orphan dependents
//! fails and is surfaced as a conflict naming the dependent entity type.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{QueryBuilder, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Billboard, BillboardPayload, Category, CategoryPayload, NewOrder, Order, Product,
    ProductFilter, ProductImage, ProductPayload, Store,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== STORE OPERATIONS ====================

    /// List all stores owned by a caller, oldest first.
    pub async fn list_stores(&self, owner_id: &str) -> Result<Vec<Store>, AppError> {
        let rows = sqlx::query(
            "SELECT id, owner_id, name, created_at, updated_at FROM stores WHERE owner_id = ? ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(store_from_row).collect())
    }

    /// Get the store with the given id, but only when the caller owns it.
    pub async fn find_store(&self, store_id: &str, owner_id: &str) -> Result<Option<Store>, AppError> {
        let row = sqlx::query(
            "SELECT id, owner_id, name, created_at, updated_at FROM stores WHERE id = ? AND owner_id = ?",
        )
        .bind(store_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(store_from_row))
    }

    /// Get the caller's first store in storage order.
    pub async fn find_first_store(&self, owner_id: &str) -> Result<Option<Store>, AppError> {
        let row = sqlx::query(
            "SELECT id, owner_id, name, created_at, updated_at FROM stores WHERE owner_id = ? LIMIT 1",
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(store_from_row))
    }

    /// Create a new store owned by the caller.
    pub async fn create_store(&self, owner_id: &str, name: &str) -> Result<Store, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO stores (id, owner_id, name, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(owner_id)
        .bind(name)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Store {
            id,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Rename a store.
    pub async fn update_store(
        &self,
        store_id: &str,
        owner_id: &str,
        name: &str,
    ) -> Result<Store, AppError> {
        let existing = self
            .find_store(store_id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store {} not found", store_id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query("UPDATE stores SET name = ?, updated_at = ? WHERE id = ? AND owner_id = ?")
            .bind(name)
            .bind(&now)
            .bind(store_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(Store {
            name: name.to_string(),
            updated_at: now,
            ..existing
        })
    }

    /// Delete a store. Blocked while any billboard, category, product, or
    /// order still belongs to it.
    pub async fn delete_store(&self, store_id: &str, owner_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = ? AND owner_id = ?")
            .bind(store_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                conflict_on_foreign_key(
                    err,
                    "Billboards, categories, products, or orders still belong to this store",
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Store {} not found", store_id)));
        }

        Ok(())
    }

    // ==================== BILLBOARD OPERATIONS ====================

    /// List a store's billboards, newest first.
    pub async fn list_billboards(&self, store_id: &str) -> Result<Vec<Billboard>, AppError> {
        let rows = sqlx::query(
            "SELECT id, store_id, label, image_url, created_at, updated_at FROM billboards WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(billboard_from_row).collect())
    }

    /// Get a billboard by id within a store.
    pub async fn get_billboard(
        &self,
        store_id: &str,
        id: &str,
    ) -> Result<Option<Billboard>, AppError> {
        let row = sqlx::query(
            "SELECT id, store_id, label, image_url, created_at, updated_at FROM billboards WHERE store_id = ? AND id = ?",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(billboard_from_row))
    }

    /// Create a new billboard.
    pub async fn create_billboard(
        &self,
        store_id: &str,
        payload: &BillboardPayload,
    ) -> Result<Billboard, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO billboards (id, store_id, label, image_url, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(store_id)
        .bind(&payload.label)
        .bind(&payload.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Billboard {
            id,
            store_id: store_id.to_string(),
            label: payload.label.clone(),
            image_url: payload.image_url.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a billboard.
    pub async fn update_billboard(
        &self,
        store_id: &str,
        id: &str,
        payload: &BillboardPayload,
    ) -> Result<Billboard, AppError> {
        let existing = self
            .get_billboard(store_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Billboard {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE billboards SET label = ?, image_url = ?, updated_at = ? WHERE store_id = ? AND id = ?",
        )
        .bind(&payload.label)
        .bind(&payload.image_url)
        .bind(&now)
        .bind(store_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Billboard {
            label: payload.label.clone(),
            image_url: payload.image_url.clone(),
            updated_at: now,
            ..existing
        })
    }

    /// Delete a billboard. Blocked while a category references it.
    pub async fn delete_billboard(&self, store_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM billboards WHERE store_id = ? AND id = ?")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                conflict_on_foreign_key(err, "Categories still reference this billboard")
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Billboard {} not found", id)));
        }

        Ok(())
    }

    // ==================== CATEGORY OPERATIONS ====================

    /// List a store's categories, newest first.
    pub async fn list_categories(&self, store_id: &str) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query(
            "SELECT id, store_id, name, billboard_id, created_at, updated_at FROM categories WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// Get a category by id within a store.
    pub async fn get_category(
        &self,
        store_id: &str,
        id: &str,
    ) -> Result<Option<Category>, AppError> {
        let row = sqlx::query(
            "SELECT id, store_id, name, billboard_id, created_at, updated_at FROM categories WHERE store_id = ? AND id = ?",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(category_from_row))
    }

    /// Create a new category. The referenced billboard must belong to the
    /// same store.
    pub async fn create_category(
        &self,
        store_id: &str,
        payload: &CategoryPayload,
    ) -> Result<Category, AppError> {
        self.ensure_billboard_in_store(store_id, &payload.billboard_id)
            .await?;

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO categories (id, store_id, name, billboard_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(store_id)
        .bind(&payload.name)
        .bind(&payload.billboard_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Category {
            id,
            store_id: store_id.to_string(),
            name: payload.name.clone(),
            billboard_id: payload.billboard_id.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a category.
    pub async fn update_category(
        &self,
        store_id: &str,
        id: &str,
        payload: &CategoryPayload,
    ) -> Result<Category, AppError> {
        let existing = self
            .get_category(store_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        self.ensure_billboard_in_store(store_id, &payload.billboard_id)
            .await?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE categories SET name = ?, billboard_id = ?, updated_at = ? WHERE store_id = ? AND id = ?",
        )
        .bind(&payload.name)
        .bind(&payload.billboard_id)
        .bind(&now)
        .bind(store_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Category {
            name: payload.name.clone(),
            billboard_id: payload.billboard_id.clone(),
            updated_at: now,
            ..existing
        })
    }

    /// Delete a category. Blocked while a product references it.
    pub async fn delete_category(&self, store_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE store_id = ? AND id = ?")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                conflict_on_foreign_key(err, "Products still reference this category")
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }

    async fn ensure_billboard_in_store(
        &self,
        store_id: &str,
        billboard_id: &str,
    ) -> Result<(), AppError> {
        let row = sqlx::query("SELECT id FROM billboards WHERE store_id = ? AND id = ?")
            .bind(store_id)
            .bind(billboard_id)
            .fetch_optional(&self.pool)
            .await?;

        if row.is_none() {
            return Err(AppError::Validation(
                "Billboard does not belong to this store".to_string(),
            ));
        }

        Ok(())
    }

    // ==================== PRODUCT OPERATIONS ====================

    /// List a store's products, newest first, with optional filters.
    pub async fn list_products(
        &self,
        store_id: &str,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, AppError> {
        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
            "SELECT id, store_id, name, price, category_id, color_id, size_id, is_featured, is_archived, created_at, updated_at FROM products WHERE store_id = ",
        );
        query.push_bind(store_id);

        if let Some(category_id) = &filter.category_id {
            query.push(" AND category_id = ");
            query.push_bind(category_id);
        }
        if let Some(is_featured) = filter.is_featured {
            query.push(" AND is_featured = ");
            query.push_bind(is_featured as i32);
        }
        if let Some(is_archived) = filter.is_archived {
            query.push(" AND is_archived = ");
            query.push_bind(is_archived as i32);
        }
        query.push(" ORDER BY created_at DESC");

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut products: Vec<Product> = rows.iter().map(product_from_row).collect();

        // One pass over the store's images instead of a query per product
        let image_rows = sqlx::query(
            "SELECT product_images.product_id, product_images.url FROM product_images \
             JOIN products ON products.id = product_images.product_id \
             WHERE products.store_id = ? ORDER BY product_images.position",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        let mut images_by_product: HashMap<String, Vec<ProductImage>> = HashMap::new();
        for row in &image_rows {
            images_by_product
                .entry(row.get("product_id"))
                .or_default()
                .push(ProductImage { url: row.get("url") });
        }

        for product in &mut products {
            if let Some(images) = images_by_product.remove(&product.id) {
                product.images = images;
            }
        }

        Ok(products)
    }

    /// Get a product by id within a store, with its image collection.
    pub async fn get_product(&self, store_id: &str, id: &str) -> Result<Option<Product>, AppError> {
        let row = sqlx::query(
            "SELECT id, store_id, name, price, category_id, color_id, size_id, is_featured, is_archived, created_at, updated_at FROM products WHERE store_id = ? AND id = ?",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut product = product_from_row(&row);

        let image_rows = sqlx::query(
            "SELECT url FROM product_images WHERE product_id = ? ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        product.images = image_rows
            .iter()
            .map(|row| ProductImage { url: row.get("url") })
            .collect();

        Ok(Some(product))
    }

    /// Create a new product. The base record and its image collection are
    /// written in a single transaction.
    pub async fn create_product(
        &self,
        store_id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let price = payload.price();

        let mut tx = self.pool.begin().await?;

        ensure_category_in_store(&mut tx, store_id, &payload.category_id).await?;

        sqlx::query(
            "INSERT INTO products (id, store_id, name, price, category_id, color_id, size_id, is_featured, is_archived, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(store_id)
        .bind(&payload.name)
        .bind(price.to_string())
        .bind(&payload.category_id)
        .bind(&payload.color_id)
        .bind(&payload.size_id)
        .bind(payload.is_featured as i32)
        .bind(payload.is_archived as i32)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        insert_images(&mut tx, &id, &payload.images, &now).await?;

        tx.commit().await?;

        Ok(Product {
            id,
            store_id: store_id.to_string(),
            name: payload.name.clone(),
            price,
            category_id: payload.category_id.clone(),
            color_id: payload.color_id.clone(),
            size_id: payload.size_id.clone(),
            images: payload.images.clone(),
            is_featured: payload.is_featured,
            is_archived: payload.is_archived,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a product, replacing its image collection. Base record and
    /// images are written in a single transaction so a crash cannot leave a
    /// product without images.
    pub async fn update_product(
        &self,
        store_id: &str,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, AppError> {
        let existing = self
            .get_product(store_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let price = payload.price();

        let mut tx = self.pool.begin().await?;

        ensure_category_in_store(&mut tx, store_id, &payload.category_id).await?;

        sqlx::query(
            "UPDATE products SET name = ?, price = ?, category_id = ?, color_id = ?, size_id = ?, is_featured = ?, is_archived = ?, updated_at = ? WHERE store_id = ? AND id = ?",
        )
        .bind(&payload.name)
        .bind(price.to_string())
        .bind(&payload.category_id)
        .bind(&payload.color_id)
        .bind(&payload.size_id)
        .bind(payload.is_featured as i32)
        .bind(payload.is_archived as i32)
        .bind(&now)
        .bind(store_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM product_images WHERE product_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        insert_images(&mut tx, id, &payload.images, &now).await?;

        tx.commit().await?;

        Ok(Product {
            name: payload.name.clone(),
            price,
            category_id: payload.category_id.clone(),
            color_id: payload.color_id.clone(),
            size_id: payload.size_id.clone(),
            images: payload.images.clone(),
            is_featured: payload.is_featured,
            is_archived: payload.is_archived,
            updated_at: now,
            ..existing
        })
    }

    /// Delete a product. Blocked while an order item references it; the
    /// image collection goes with the product.
    pub async fn delete_product(&self, store_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE store_id = ? AND id = ?")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                conflict_on_foreign_key(err, "Order items still reference this product")
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        Ok(())
    }

    // ==================== ORDER OPERATIONS ====================

    /// List a store's orders, newest first, with the derived product summary.
    pub async fn list_orders(&self, store_id: &str) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query(
            "SELECT orders.id, orders.store_id, orders.phone, orders.address, orders.is_paid, orders.total_price, orders.created_at, orders.updated_at, \
                    COALESCE(GROUP_CONCAT(products.name, ', '), '') AS products \
             FROM orders \
             LEFT JOIN order_items ON order_items.order_id = orders.id \
             LEFT JOIN products ON products.id = order_items.product_id \
             WHERE orders.store_id = ? \
             GROUP BY orders.id \
             ORDER BY orders.created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(order_from_row).collect())
    }

    /// Get an order by id within a store.
    pub async fn get_order(&self, store_id: &str, id: &str) -> Result<Option<Order>, AppError> {
        let row = sqlx::query(
            "SELECT orders.id, orders.store_id, orders.phone, orders.address, orders.is_paid, orders.total_price, orders.created_at, orders.updated_at, \
                    COALESCE(GROUP_CONCAT(products.name, ', '), '') AS products \
             FROM orders \
             LEFT JOIN order_items ON order_items.order_id = orders.id \
             LEFT JOIN products ON products.id = order_items.product_id \
             WHERE orders.store_id = ? AND orders.id = ? \
             GROUP BY orders.id",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(order_from_row))
    }

    /// Record a new order. The admin HTTP surface is read-only for orders;
    /// this is the seam the storefront checkout writes through. Total price
    /// is the sum of the referenced products' prices at insert time.
    #[allow(dead_code)]
    pub async fn create_order(&self, store_id: &str, order: &NewOrder) -> Result<Order, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let mut total_price = Decimal::ZERO;
        let mut product_names = Vec::new();
        for product_id in &order.product_ids {
            let row = sqlx::query("SELECT name, price FROM products WHERE store_id = ? AND id = ?")
                .bind(store_id)
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await?;

            let Some(row) = row else {
                return Err(AppError::Validation(
                    "Product does not belong to this store".to_string(),
                ));
            };

            let price: String = row.get("price");
            total_price += parse_decimal(&price);
            product_names.push(row.get::<String, _>("name"));
        }

        sqlx::query(
            "INSERT INTO orders (id, store_id, phone, address, is_paid, total_price, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(store_id)
        .bind(&order.phone)
        .bind(&order.address)
        .bind(order.is_paid as i32)
        .bind(total_price.to_string())
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for product_id in &order.product_ids {
            sqlx::query("INSERT INTO order_items (id, order_id, product_id) VALUES (?, ?, ?)")
                .bind(uuid::Uuid::new_v4().to_string())
                .bind(&id)
                .bind(product_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id,
            store_id: store_id.to_string(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            is_paid: order.is_paid,
            total_price,
            products: product_names.join(", "),
            created_at: now.clone(),
            updated_at: now,
        })
    }
}

async fn ensure_category_in_store(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    store_id: &str,
    category_id: &str,
) -> Result<(), AppError> {
    let row = sqlx::query("SELECT id FROM categories WHERE store_id = ? AND id = ?")
        .bind(store_id)
        .bind(category_id)
        .fetch_optional(&mut **tx)
        .await?;

    if row.is_none() {
        return Err(AppError::Validation(
            "Category does not belong to this store".to_string(),
        ));
    }

    Ok(())
}

async fn insert_images(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    product_id: &str,
    images: &[ProductImage],
    now: &str,
) -> Result<(), AppError> {
    for (position, image) in images.iter().enumerate() {
        sqlx::query(
            "INSERT INTO product_images (id, product_id, url, position, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(product_id)
        .bind(&image.url)
        .bind(position as i64)
        .bind(now)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// Map a foreign-key failure on delete to a conflict naming the dependent
/// entity type; pass other database errors through.
fn conflict_on_foreign_key(err: sqlx::Error, message: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        tracing::warn!("Delete blocked by dependents: {}", message);
        AppError::Conflict(message.to_string())
    } else {
        AppError::from(err)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation))
}

// Helper functions for row conversion

fn store_from_row(row: &sqlx::sqlite::SqliteRow) -> Store {
    Store {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn billboard_from_row(row: &sqlx::sqlite::SqliteRow) -> Billboard {
    Billboard {
        id: row.get("id"),
        store_id: row.get("store_id"),
        label: row.get("label"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn category_from_row(row: &sqlx::sqlite::SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        store_id: row.get("store_id"),
        name: row.get("name"),
        billboard_id: row.get("billboard_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn product_from_row(row: &sqlx::sqlite::SqliteRow) -> Product {
    let price: String = row.get("price");
    let is_featured: i32 = row.get("is_featured");
    let is_archived: i32 = row.get("is_archived");

    Product {
        id: row.get("id"),
        store_id: row.get("store_id"),
        name: row.get("name"),
        price: parse_decimal(&price),
        category_id: row.get("category_id"),
        color_id: row.get("color_id"),
        size_id: row.get("size_id"),
        images: Vec::new(),
        is_featured: is_featured != 0,
        is_archived: is_archived != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn order_from_row(row: &sqlx::sqlite::SqliteRow) -> Order {
    let is_paid: i32 = row.get("is_paid");
    let total_price: String = row.get("total_price");

    Order {
        id: row.get("id"),
        store_id: row.get("store_id"),
        phone: row.get("phone"),
        address: row.get("address"),
        is_paid: is_paid != 0,
        total_price: parse_decimal(&total_price),
        products: row.get("products"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn parse_decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or_default()
}
