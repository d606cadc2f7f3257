use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{CarRow, CarWithBrandRow};

/// All cars with their brand join-fetched, name-ascending; equal names fall
/// back to identity order.
pub async fn list_with_brand<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CarWithBrandRow>> {
    sqlx::query_as::<_, CarWithBrandRow>(
        r#"
        SELECT c.id, c.name, c.brand_id, b.name AS brand_name
        FROM cars c
        LEFT JOIN brands b ON b.id = c.brand_id
        ORDER BY c.name ASC, c.id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    brand_id: Option<i32>,
) -> SqlxResult<CarRow> {
    sqlx::query_as::<_, CarRow>(
        r#"
        INSERT INTO cars (name, brand_id)
        VALUES ($1, $2)
        RETURNING id, name, brand_id
        "#,
    )
    .bind(name)
    .bind(brand_id)
    .fetch_one(executor)
    .await
}
