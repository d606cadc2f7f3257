use async_graphql::{Context, Object, Result};
use sqlx::PgConnection;

use crate::gql::error::GqlError;
use crate::gql::types::{AddBrandResult, AddCarResult, BrandExists, Car};
use crate::state::AppState;
use infra::db::{is_unique_violation, with_session};
use infra::repos::{brands, cars};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a car, optionally attached to an existing brand by exact name.
    /// An unknown brand name yields an unassociated car, not an error.
    async fn add_car(
        &self,
        ctx: &Context<'_>,
        name: String,
        brand_name: Option<String>,
    ) -> Result<AddCarResult> {
        let state = ctx.data::<AppState>()?;

        let (row, brand) = with_session(&state.db, move |session: &mut PgConnection| {
            Box::pin(async move {
                let brand = match brand_name.as_deref() {
                    Some(brand_name) => brands::get_by_name(&mut *session, brand_name).await?,
                    None => None,
                };
                let row =
                    cars::insert(&mut *session, &name, brand.as_ref().map(|b| b.id)).await?;
                Ok((row, brand))
            })
        })
        .await
        .map_err(GqlError::from)?;

        Ok(AddCarResult::Car(Car::from_insert(row, brand)))
    }

    /// Create a brand with a globally unique name; a duplicate name returns
    /// the conflict variant and writes nothing.
    async fn add_brand(&self, ctx: &Context<'_>, name: String) -> Result<AddBrandResult> {
        let state = ctx.data::<AppState>()?;

        let created = with_session(&state.db, move |session: &mut PgConnection| {
            Box::pin(async move {
                if brands::get_by_name(&mut *session, &name).await?.is_some() {
                    return Ok(None);
                }
                brands::insert(&mut *session, &name).await.map(Some)
            })
        })
        .await;

        match created {
            Ok(Some(row)) => Ok(AddBrandResult::Brand(row.into())),
            Ok(None) => Ok(AddBrandResult::BrandExists(BrandExists::new())),
            // Two callers can pass the existence check before either commits;
            // the unique index reports the loser here.
            Err(err) if is_unique_violation(&err) => {
                Ok(AddBrandResult::BrandExists(BrandExists::new()))
            }
            Err(err) => Err(GqlError::from(err).into()),
        }
    }
}
