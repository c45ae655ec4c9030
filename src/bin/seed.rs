use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;

use pizza_api::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant};
use pizza_api::{establish_pool, schema, MIGRATIONS};

fn main() {
    dotenv().ok();

    let database_url = std::env::var("DB_URI").unwrap_or_else(|_| "app.db".to_string());
    let pool = establish_pool(&database_url);
    let conn = &mut pool.get().expect("Failed to get connection");

    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(schema::restaurant_pizzas::table).execute(conn)?;
        diesel::delete(schema::pizzas::table).execute(conn)?;
        diesel::delete(schema::restaurants::table).execute(conn)?;

        let restaurants = diesel::insert_into(schema::restaurants::table)
            .values(&vec![
                NewRestaurant {
                    name: "Karen's Pizza Shack".to_string(),
                    address: "address1".to_string(),
                },
                NewRestaurant {
                    name: "Sanjay's Pizza".to_string(),
                    address: "address2".to_string(),
                },
                NewRestaurant {
                    name: "Kiki's Pizza".to_string(),
                    address: "address3".to_string(),
                },
            ])
            .returning(Restaurant::as_returning())
            .get_results::<Restaurant>(&mut **conn)?;

        let pizzas = diesel::insert_into(schema::pizzas::table)
            .values(&vec![
                NewPizza {
                    name: "Emma".to_string(),
                    ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
                },
                NewPizza {
                    name: "Geri".to_string(),
                    ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
                },
                NewPizza {
                    name: "Melanie".to_string(),
                    ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".to_string(),
                },
            ])
            .returning(Pizza::as_returning())
            .get_results::<Pizza>(&mut **conn)?;

        diesel::insert_into(schema::restaurant_pizzas::table)
            .values(&vec![
                NewRestaurantPizza {
                    price: 1,
                    restaurant_id: restaurants[0].id,
                    pizza_id: pizzas[0].id,
                },
                NewRestaurantPizza {
                    price: 4,
                    restaurant_id: restaurants[1].id,
                    pizza_id: pizzas[1].id,
                },
                NewRestaurantPizza {
                    price: 5,
                    restaurant_id: restaurants[2].id,
                    pizza_id: pizzas[2].id,
                },
            ])
            .execute(conn)?;

        Ok(())
    })
    .expect("Failed to seed database");

    println!("Done seeding!");
}
