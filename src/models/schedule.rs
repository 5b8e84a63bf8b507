//! Modelo de DistributionSchedule
//!
//! El modelo arrastra dos familias de campos porque create y update usan
//! formas distintas: la creación trabaja con `days_of_week` (lista) y
//! `duration_hours`; la actualización con `day_of_week` (único) y
//! `estimated_duration` en minutos. Se conservan ambas tal cual.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    pub id: Uuid,
    pub organization_id: String,
    pub schedule_code: String,
    pub route_id: String,
    pub zone_id: String,
    pub schedule_name: String,
    pub days_of_week: Json<Vec<String>>,
    pub day_of_week: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    pub estimated_duration: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
