use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use diesel::prelude::*;
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models;
use crate::schema;
use crate::views::RestaurantPizzaCreatedView;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

/// Fields are optional so absence surfaces as the API's own 400 body rather
/// than a deserialization rejection. An absent price gets the same message as
/// an out-of-range one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: Option<i32>,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offering created", body = RestaurantPizzaCreatedView),
        (status = 400, description = "Invalid price or unknown restaurant/pizza", body = crate::views::ErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreatedView>), ApiError> {
    let price = match payload.price {
        Some(price) if (1..=30).contains(&price) => price,
        _ => return Err(ApiError::PriceOutOfRange),
    };
    let pizza_id = payload
        .pizza_id
        .ok_or_else(|| ApiError::Unprocessable("pizza_id is required".to_string()))?;
    let restaurant_id = payload
        .restaurant_id
        .ok_or_else(|| ApiError::Unprocessable("restaurant_id is required".to_string()))?;

    let new_offering = models::NewRestaurantPizza {
        price,
        restaurant_id,
        pizza_id,
    };

    let conn = &mut state.pool.get()?;

    // A missing parent trips the foreign key constraint here; the store's
    // message goes back to the caller as-is.
    let offering = conn
        .transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(schema::restaurant_pizzas::table)
                .values(&new_offering)
                .returning(models::RestaurantPizza::as_returning())
                .get_result(conn)
        })
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let pizza = schema::pizzas::table
        .find(offering.pizza_id)
        .select(models::Pizza::as_select())
        .first(conn)?;
    let restaurant = schema::restaurants::table
        .find(offering.restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaCreatedView::new(offering, pizza, restaurant)),
    ))
}
