//! DTOs de Schedule
//!
//! Create y update son formas deliberadamente distintas: la creación recibe
//! una lista de días y la duración en horas; la actualización un único día
//! y la duración estimada en minutos. Es el contrato heredado del servicio
//! original y se modela con dos DTOs, no con un record de opcionales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::schedule::Schedule;

/// Request para crear un horario de distribución
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCreateRequest {
    #[validate(length(min = 1))]
    pub organization_id: String,

    #[validate(length(min = 1))]
    pub route_id: String,

    #[validate(length(min = 1))]
    pub zone_id: String,

    #[validate(length(min = 1))]
    pub schedule_name: String,

    #[validate(length(min = 1))]
    pub days_of_week: Vec<String>,

    /// Formato `HH:mm`
    pub start_time: String,
    /// Formato `HH:mm`
    pub end_time: String,

    /// Duración en horas
    #[validate(range(min = 1))]
    pub duration_hours: i32,
}

/// Request para actualizar un horario existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdateRequest {
    #[validate(length(min = 1))]
    pub route_id: String,

    #[validate(length(min = 1))]
    pub day_of_week: String,

    /// Formato `HH:mm`
    pub start_time: String,
    /// Formato `HH:mm`
    pub end_time: String,

    /// Duración estimada en minutos
    #[validate(range(min = 1))]
    pub estimated_duration: i32,
}

/// Response de horario para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub organization_id: String,
    pub schedule_code: String,
    pub route_id: String,
    pub zone_id: String,
    pub schedule_name: String,
    pub days_of_week: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            organization_id: schedule.organization_id,
            schedule_code: schedule.schedule_code,
            route_id: schedule.route_id,
            zone_id: schedule.zone_id,
            schedule_name: schedule.schedule_name,
            days_of_week: schedule.days_of_week.0,
            day_of_week: schedule.day_of_week,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            duration_hours: schedule.duration_hours,
            estimated_duration: schedule.estimated_duration,
            status: schedule.status,
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}
