use async_graphql::{Context, Object, Result};
use sqlx::PgConnection;

use crate::gql::error::GqlError;
use crate::gql::types::{Brand, Car};
use crate::state::AppState;
use infra::db::with_session;
use infra::repos::{brands, cars};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All cars, name-ascending, each carrying its brand resolved in the
    /// same read.
    async fn cars(&self, ctx: &Context<'_>) -> Result<Vec<Car>> {
        let state = ctx.data::<AppState>()?;
        let rows = with_session(&state.db, |session: &mut PgConnection| {
            Box::pin(async move { cars::list_with_brand(&mut *session).await })
        })
        .await
        .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// All brands, name-ascending.
    async fn brands(&self, ctx: &Context<'_>) -> Result<Vec<Brand>> {
        let state = ctx.data::<AppState>()?;
        let rows = with_session(&state.db, |session: &mut PgConnection| {
            Box::pin(async move { brands::list(&mut *session).await })
        })
        .await
        .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
