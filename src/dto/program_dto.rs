//! DTOs de Program
//!
//! El mismo request sirve para create y update (contrato heredado): en el
//! update se ignoran programDate, scheduleId y routeId además del código.
//! La response serializa programDate como `YYYY-MM-DD` y createdAt como
//! string RFC3339; otras entidades pasan el timestamp estructurado, esa
//! asimetría es parte del contrato y no se unifica.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::program::Program;

/// Request para crear o actualizar un programa de distribución
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCreateRequest {
    #[validate(length(min = 1))]
    pub organization_id: String,

    #[validate(length(min = 1))]
    pub schedule_id: String,

    #[validate(length(min = 1))]
    pub route_id: String,

    #[validate(length(min = 1))]
    pub zone_id: String,

    #[validate(length(min = 1))]
    pub street_id: String,

    /// Formato estricto `YYYY-MM-DD`
    pub program_date: String,

    pub planned_start_time: String,
    pub planned_end_time: String,
    pub actual_start_time: Option<String>,
    pub actual_end_time: Option<String>,

    pub status: String,

    #[validate(length(min = 1))]
    pub responsible_user_id: String,

    pub observations: Option<String>,
}

/// Response de programa para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResponse {
    pub id: Uuid,
    pub organization_id: String,
    pub program_code: String,
    pub schedule_id: String,
    pub route_id: String,
    pub zone_id: String,
    pub street_id: String,
    pub program_date: String,
    pub planned_start_time: String,
    pub planned_end_time: String,
    pub actual_start_time: Option<String>,
    pub actual_end_time: Option<String>,
    pub status: String,
    pub responsible_user_id: String,
    pub observations: Option<String>,
    pub created_at: String,
}

impl From<Program> for ProgramResponse {
    fn from(program: Program) -> Self {
        Self {
            id: program.id,
            organization_id: program.organization_id,
            program_code: program.program_code,
            schedule_id: program.schedule_id,
            route_id: program.route_id,
            zone_id: program.zone_id,
            street_id: program.street_id,
            program_date: program.program_date.format("%Y-%m-%d").to_string(),
            planned_start_time: program.planned_start_time,
            planned_end_time: program.planned_end_time,
            actual_start_time: program.actual_start_time,
            actual_end_time: program.actual_end_time,
            status: program.status,
            responsible_user_id: program.responsible_user_id,
            observations: program.observations,
            created_at: program.created_at.to_rfc3339(),
        }
    }
}
