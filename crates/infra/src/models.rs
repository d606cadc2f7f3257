use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BrandRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CarRow {
    pub id: i32,
    pub name: String,
    pub brand_id: Option<i32>,
}

/// Car joined with its brand in a single read, so the returned record is
/// already fully populated when the session closes.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CarWithBrandRow {
    pub id: i32,
    pub name: String,
    pub brand_id: Option<i32>,
    pub brand_name: Option<String>,
}
