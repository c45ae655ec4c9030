use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Pizza, Restaurant, RestaurantPizza};

/// Flat restaurant representation used in list contexts.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantView {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Flat pizza representation used in list contexts and nested views.
#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaView {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

/// Restaurant with its offerings expanded one level. Each offering nests the
/// pizza but not the restaurant, so the shape never cycles back to the parent.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailView {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<OfferingView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OfferingView {
    pub id: i32,
    pub pizza_id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaView,
}

/// Response for a newly created association: the join row with both parents
/// nested flat, single level.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaCreatedView {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaView,
    pub restaurant: RestaurantView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

impl From<Restaurant> for RestaurantView {
    fn from(restaurant: Restaurant) -> Self {
        RestaurantView {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

impl From<Pizza> for PizzaView {
    fn from(pizza: Pizza) -> Self {
        PizzaView {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

impl RestaurantDetailView {
    pub fn new(restaurant: Restaurant, offerings: Vec<(RestaurantPizza, Pizza)>) -> Self {
        RestaurantDetailView {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: offerings
                .into_iter()
                .map(|(offering, pizza)| OfferingView {
                    id: offering.id,
                    pizza_id: offering.pizza_id,
                    price: offering.price,
                    restaurant_id: offering.restaurant_id,
                    pizza: pizza.into(),
                })
                .collect(),
        }
    }
}

impl RestaurantPizzaCreatedView {
    pub fn new(offering: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        RestaurantPizzaCreatedView {
            id: offering.id,
            price: offering.price,
            pizza_id: offering.pizza_id,
            restaurant_id: offering.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}
