use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::program_dto::{ProgramCreateRequest, ProgramResponse};
use crate::dto::ApiResponse;
use crate::repositories::program_repository::PgProgramRepository;
use crate::services::program_service::ProgramService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_program_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_program))
        .route("/", get(list_programs))
        .route("/:id", get(get_program))
        .route("/:id", put(update_program))
        .route("/:id", delete(delete_program))
        .route("/:id/activate", patch(activate_program))
        .route("/:id/deactivate", patch(deactivate_program))
}

fn service(state: &AppState) -> ProgramService<PgProgramRepository> {
    ProgramService::new(PgProgramRepository::new(state.pool.clone()))
}

async fn create_program(
    State(state): State<AppState>,
    Json(request): Json<ProgramCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProgramResponse>>), AppError> {
    let response = service(&state).create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Program created successfully".to_string(),
        )),
    ))
}

async fn list_programs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgramResponse>>, AppError> {
    Ok(Json(service(&state).get_all().await?))
}

async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgramResponse>, AppError> {
    Ok(Json(service(&state).get_by_id(id).await?))
}

async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProgramCreateRequest>,
) -> Result<Json<ApiResponse<ProgramResponse>>, AppError> {
    let response = service(&state).update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Program updated successfully".to_string(),
    )))
}

async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    service(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Program deleted successfully"
    })))
}

async fn activate_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgramResponse>, AppError> {
    Ok(Json(service(&state).activate(id).await?))
}

async fn deactivate_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgramResponse>, AppError> {
    Ok(Json(service(&state).deactivate(id).await?))
}
