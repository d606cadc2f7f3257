use async_graphql::{SimpleObject, Union, ID};

use infra::models::{BrandRow, CarRow, CarWithBrandRow};

pub const BRAND_EXISTS_MESSAGE: &str = "Brand with this name already exist";

#[derive(Debug, Clone, SimpleObject)]
pub struct Brand {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Car {
    pub id: ID,
    pub name: String,
    pub brand: Option<Brand>,
}

/// Conflict payload for a duplicate brand name.
#[derive(Debug, Clone, SimpleObject)]
pub struct BrandExists {
    pub message: String,
}

impl BrandExists {
    pub fn new() -> Self {
        Self {
            message: BRAND_EXISTS_MESSAGE.to_string(),
        }
    }
}

impl Default for BrandExists {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-variant today; a union so failure members can be added without a
/// breaking schema change.
#[derive(Union)]
pub enum AddCarResult {
    Car(Car),
}

#[derive(Union)]
pub enum AddBrandResult {
    Brand(Brand),
    BrandExists(BrandExists),
}

impl From<BrandRow> for Brand {
    fn from(row: BrandRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
        }
    }
}

impl From<CarWithBrandRow> for Car {
    fn from(row: CarWithBrandRow) -> Self {
        let brand = row.brand_id.zip(row.brand_name).map(|(id, name)| Brand {
            id: id.into(),
            name,
        });
        Self {
            id: row.id.into(),
            name: row.name,
            brand,
        }
    }
}

impl Car {
    /// Marshal a freshly inserted car together with the brand row resolved in
    /// the same session.
    pub fn from_insert(row: CarRow, brand: Option<BrandRow>) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            brand: brand.map(Brand::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_with_brand_row_resolves_brand() {
        let car = Car::from(CarWithBrandRow {
            id: 7,
            name: "Model S".to_string(),
            brand_id: Some(3),
            brand_name: Some("Tesla".to_string()),
        });

        assert_eq!(car.id, ID::from(7));
        let brand = car.brand.expect("brand should be populated");
        assert_eq!(brand.id, ID::from(3));
        assert_eq!(brand.name, "Tesla");
    }

    #[test]
    fn car_without_brand_marshals_null_brand() {
        let car = Car::from(CarWithBrandRow {
            id: 1,
            name: "Kit Car".to_string(),
            brand_id: None,
            brand_name: None,
        });

        assert!(car.brand.is_none());
    }

    #[test]
    fn brand_exists_carries_fixed_message() {
        assert_eq!(BrandExists::new().message, BRAND_EXISTS_MESSAGE);
    }
}
