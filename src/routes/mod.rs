//! Routers de la API
//!
//! Un router por entidad, anidados bajo /api desde main.

pub mod fare_routes;
pub mod program_routes;
pub mod route_routes;
pub mod schedule_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/programs", program_routes::create_program_router())
        .nest("/routes", route_routes::create_route_router())
        .nest("/schedules", schedule_routes::create_schedule_router())
        .nest("/fares", fare_routes::create_fare_router())
}
