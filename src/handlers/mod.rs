pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::response::Html;
use utoipa::OpenApi;

use crate::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::views::RestaurantView,
            crate::views::PizzaView,
            crate::views::RestaurantDetailView,
            crate::views::OfferingView,
            crate::views::RestaurantPizzaCreatedView,
            crate::views::NotFoundResponse,
            crate::views::ErrorsResponse,
            restaurant_pizza::CreateRestaurantPizzaRequest,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant listing and management endpoints"),
        (name = "pizzas", description = "Pizza listing endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant-pizza offering endpoints")
    ),
    info(
        title = "Pizza Restaurants API",
        description = "Restaurants, pizzas, and the priced offerings between them",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
