//! Modelo de DistributionProgram
//!
//! Programa de distribución: una ejecución planificada de una ruta sobre una
//! zona en una fecha concreta. El código PROG### lo genera el servicio.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Program {
    pub id: Uuid,
    pub organization_id: String,
    pub program_code: String,
    pub schedule_id: String,
    pub route_id: String,
    pub zone_id: String,
    pub street_id: String,
    pub program_date: NaiveDate,
    pub planned_start_time: String,
    pub planned_end_time: String,
    pub actual_start_time: Option<String>,
    pub actual_end_time: Option<String>,
    // Status libre (no se restringe a ACTIVE/INACTIVE como el resto)
    pub status: String,
    pub responsible_user_id: String,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}
