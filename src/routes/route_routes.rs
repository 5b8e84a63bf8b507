use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::route_dto::{RouteCreateRequest, RouteResponse, RouteUpdateRequest};
use crate::dto::ApiResponse;
use crate::repositories::route_repository::PgRouteRepository;
use crate::services::route_service::RouteService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/active", get(list_active_routes))
        .route("/inactive", get(list_inactive_routes))
        .route("/:id", get(get_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
        .route("/:id/activate", patch(activate_route))
        .route("/:id/deactivate", patch(deactivate_route))
}

fn service(state: &AppState) -> RouteService<PgRouteRepository> {
    RouteService::new(PgRouteRepository::new(state.pool.clone()))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<RouteCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RouteResponse>>), AppError> {
    let response = service(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Route created successfully".to_string(),
        )),
    ))
}

async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<RouteResponse>>, AppError> {
    Ok(Json(service(&state).get_all().await?))
}

async fn list_active_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    Ok(Json(service(&state).get_all_active().await?))
}

async fn list_inactive_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    Ok(Json(service(&state).get_all_inactive().await?))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    Ok(Json(service(&state).get_by_id(id).await?))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RouteUpdateRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let response = service(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Route updated successfully".to_string(),
    )))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    service(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Route deleted successfully"
    })))
}

async fn activate_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    Ok(Json(service(&state).activate(id).await?))
}

async fn deactivate_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    Ok(Json(service(&state).deactivate(id).await?))
}
