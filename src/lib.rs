use axum::{routing::get, Router};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod views;

use handlers::{pizza_router, restaurant_pizza_router, restaurant_router, AppState};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Turns on foreign key enforcement for every pooled connection. SQLite
/// scopes the pragma to the connection and leaves it off by default.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

pub fn establish_pool(database_url: &str) -> DbPool {
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(ConnectionManager::new(database_url))
        .expect("Failed to create connection pool")
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .with_state(state)
}
