use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::fare_dto::{FareCreateRequest, FareResponse, FareUpdateRequest};
use crate::dto::ApiResponse;
use crate::repositories::fare_repository::PgFareRepository;
use crate::services::fare_service::FareService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fare_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fare))
        .route("/", get(list_fares))
        .route("/active", get(list_active_fares))
        .route("/inactive", get(list_inactive_fares))
        .route("/:id", get(get_fare))
        .route("/:id", put(update_fare))
        .route("/:id", delete(delete_fare))
        .route("/:id/activate", patch(activate_fare))
        .route("/:id/deactivate", patch(deactivate_fare))
}

fn service(state: &AppState) -> FareService<PgFareRepository> {
    FareService::new(PgFareRepository::new(state.pool.clone()))
}

async fn create_fare(
    State(state): State<AppState>,
    Json(request): Json<FareCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FareResponse>>), AppError> {
    let response = service(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Fare created successfully".to_string(),
        )),
    ))
}

async fn list_fares(State(state): State<AppState>) -> Result<Json<Vec<FareResponse>>, AppError> {
    Ok(Json(service(&state).get_all().await?))
}

async fn list_active_fares(
    State(state): State<AppState>,
) -> Result<Json<Vec<FareResponse>>, AppError> {
    Ok(Json(service(&state).get_all_active().await?))
}

async fn list_inactive_fares(
    State(state): State<AppState>,
) -> Result<Json<Vec<FareResponse>>, AppError> {
    Ok(Json(service(&state).get_all_inactive().await?))
}

async fn get_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FareResponse>, AppError> {
    Ok(Json(service(&state).get_by_id(id).await?))
}

async fn update_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FareUpdateRequest>,
) -> Result<Json<ApiResponse<FareResponse>>, AppError> {
    let response = service(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Fare updated successfully".to_string(),
    )))
}

async fn delete_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    service(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Fare deleted successfully"
    })))
}

async fn activate_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FareResponse>, AppError> {
    Ok(Json(service(&state).activate(id).await?))
}

async fn deactivate_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FareResponse>, AppError> {
    Ok(Json(service(&state).deactivate(id).await?))
}
