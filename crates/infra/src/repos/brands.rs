use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::BrandRow;

/// All brands, name-ascending; equal names fall back to identity order.
pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<BrandRow>> {
    sqlx::query_as::<_, BrandRow>(
        r#"
        SELECT id, name
        FROM brands
        ORDER BY name ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_name<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
) -> SqlxResult<Option<BrandRow>> {
    sqlx::query_as::<_, BrandRow>(
        r#"
        SELECT id, name
        FROM brands
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e>(executor: impl PgExecutor<'e>, name: &str) -> SqlxResult<BrandRow> {
    sqlx::query_as::<_, BrandRow>(
        r#"
        INSERT INTO brands (name)
        VALUES ($1)
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
}
