use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::schedule_dto::{ScheduleCreateRequest, ScheduleResponse, ScheduleUpdateRequest};
use crate::dto::ApiResponse;
use crate::repositories::schedule_repository::PgScheduleRepository;
use crate::services::schedule_service::ScheduleService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_schedule))
        .route("/", get(list_schedules))
        .route("/active", get(list_active_schedules))
        .route("/inactive", get(list_inactive_schedules))
        .route("/:id", get(get_schedule))
        .route("/:id", put(update_schedule))
        .route("/:id", delete(delete_schedule))
        .route("/:id/activate", patch(activate_schedule))
        .route("/:id/deactivate", patch(deactivate_schedule))
}

fn service(state: &AppState) -> ScheduleService<PgScheduleRepository> {
    ScheduleService::new(PgScheduleRepository::new(state.pool.clone()))
}

async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ScheduleResponse>>), AppError> {
    let response = service(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Schedule created successfully".to_string(),
        )),
    ))
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    Ok(Json(service(&state).get_all().await?))
}

async fn list_active_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    Ok(Json(service(&state).get_all_active().await?))
}

async fn list_inactive_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    Ok(Json(service(&state).get_all_inactive().await?))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleResponse>, AppError> {
    Ok(Json(service(&state).get_by_id(id).await?))
}

async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScheduleUpdateRequest>,
) -> Result<Json<ApiResponse<ScheduleResponse>>, AppError> {
    let response = service(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Schedule updated successfully".to_string(),
    )))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    service(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Schedule deleted successfully"
    })))
}

async fn activate_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleResponse>, AppError> {
    Ok(Json(service(&state).activate(id).await?))
}

async fn deactivate_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleResponse>, AppError> {
    Ok(Json(service(&state).deactivate(id).await?))
}
