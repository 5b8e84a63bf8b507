//! Modelo de DistributionRoute
//!
//! Ruta de distribución con su lista ordenada de zonas. Las zonas se
//! persisten como JSONB en la columna `zones`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub organization_id: String,
    pub route_code: String,
    pub route_name: String,
    pub zones: Json<Vec<ZoneOrder>>,
    pub total_estimated_duration: i32,
    pub responsible_user_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Parada de la ruta: zona, posición dentro del recorrido y duración
/// estimada en horas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOrder {
    pub zone_id: String,
    pub order: i32,
    pub estimated_duration: i32,
}
