//! Repository for the `products` table.

use sqlx::PgPool;
use vitrina_core::catalog::{self, CATEGORY_ALL};
use vitrina_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductListFilter, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, price, old_price, image, badge, \
    description, is_active, created_at, updated_at";

/// A page of products plus the total match count (pre-pagination).
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
}

/// Provides data access for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. `is_active` defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, category, price, old_price, image, badge, description, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.old_price)
            .bind(&input.image)
            .bind(&input.badge)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an active product by id.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active products with filtering, sorting, and pagination.
    ///
    /// Filters: exact `category` (the value `"all"` means no filter) and a
    /// case-insensitive substring `search` on the name. The total count is
    /// taken over the same filter so callers can derive page counts.
    pub async fn list(pool: &PgPool, filter: &ProductListFilter) -> Result<ProductPage, sqlx::Error> {
        let mut conditions = vec!["is_active = TRUE".to_string()];
        let mut bind_idx = 1u32;

        let category = filter
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != CATEGORY_ALL);
        if category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }

        let search_pattern = filter
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));
        if search_pattern.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = conditions.join(" AND ");
        let order_by = filter.sort.order_by_sql();

        let limit = catalog::clamp_limit(filter.limit);
        let page = catalog::clamp_page(filter.page);
        let offset = catalog::page_offset(page, limit);

        let list_query = format!(
            "SELECT {COLUMNS} FROM products WHERE {where_clause} \
             ORDER BY {order_by} LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let count_query = format!("SELECT COUNT(*) FROM products WHERE {where_clause}");

        let mut list = sqlx::query_as::<_, Product>(&list_query);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(cat) = category {
            list = list.bind(cat.to_string());
            count = count.bind(cat.to_string());
        }
        if let Some(pattern) = &search_pattern {
            list = list.bind(pattern.clone());
            count = count.bind(pattern.clone());
        }

        let products = list.bind(limit).bind(offset).fetch_all(pool).await?;
        let total = count.fetch_one(pool).await?;

        Ok(ProductPage { products, total })
    }

    /// Partial update. Only non-`None` fields are applied; `updated_at` is
    /// always refreshed. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                old_price = COALESCE($5, old_price),
                image = COALESCE($6, image),
                badge = COALESCE($7, badge),
                description = COALESCE($8, description),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.old_price)
            .bind(&input.image)
            .bind(&input.badge)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count active products (used by the seed routine).
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
            .fetch_one(pool)
            .await
    }
}

/// Escape LIKE wildcards in user-supplied search text.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
