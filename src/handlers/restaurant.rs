use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use diesel::prelude::*;
use tracing::instrument;

use crate::error::ApiError;
use crate::models;
use crate::schema;
use crate::views::{RestaurantDetailView, RestaurantView};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants, flat", body = Vec<RestaurantView>),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantView>>, ApiError> {
    use schema::restaurants::dsl::*;

    let conn = &mut state.pool.get()?;
    let results = restaurants
        .select(models::Restaurant::as_select())
        .load(conn)?;

    Ok(Json(
        results.into_iter().map(RestaurantView::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its offerings", body = RestaurantDetailView),
        (status = 404, description = "Restaurant not found", body = crate::views::NotFoundResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<Json<RestaurantDetailView>, ApiError> {
    let conn = &mut state.pool.get()?;

    let restaurant = schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::RestaurantNotFound)?;

    let offerings = models::RestaurantPizza::belonging_to(&restaurant)
        .inner_join(schema::pizzas::table)
        .select((
            models::RestaurantPizza::as_select(),
            models::Pizza::as_select(),
        ))
        .load::<(models::RestaurantPizza, models::Pizza)>(conn)?;

    Ok(Json(RestaurantDetailView::new(restaurant, offerings)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its offerings deleted"),
        (status = 404, description = "Restaurant not found", body = crate::views::NotFoundResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut state.pool.get()?;

    // Offerings first, then the parent, in one transaction
    conn.transaction::<_, ApiError, _>(|conn| {
        let restaurant = schema::restaurants::table
            .find(restaurant_id)
            .select(models::Restaurant::as_select())
            .first(conn)
            .optional()?
            .ok_or(ApiError::RestaurantNotFound)?;

        diesel::delete(models::RestaurantPizza::belonging_to(&restaurant)).execute(conn)?;
        diesel::delete(&restaurant).execute(conn)?;

        Ok(())
    })?;

    Ok(StatusCode::NO_CONTENT)
}
