//! DTOs de Fare

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::fare::Fare;

/// Request para crear una tarifa.
/// La validación (organización y nombre no vacíos, monto > 0) la hace el
/// servicio antes de tocar el store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareCreateRequest {
    pub organization_id: String,
    pub fare_name: String,
    pub fare_type: String,
    pub fare_amount: Decimal,
}

/// Request para actualizar una tarifa existente
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareUpdateRequest {
    pub fare_code: Option<String>,
    pub price: Option<f64>,
    /// Aceptado por compatibilidad con clientes existentes pero nunca
    /// persistido: el modelo de tarifa no tiene campo description.
    pub description: Option<String>,
}

/// Response de tarifa para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareResponse {
    pub id: Uuid,
    pub organization_id: String,
    pub fare_code: String,
    pub fare_name: String,
    pub fare_type: String,
    pub fare_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Fare> for FareResponse {
    fn from(fare: Fare) -> Self {
        Self {
            id: fare.id,
            organization_id: fare.organization_id,
            fare_code: fare.fare_code,
            fare_name: fare.fare_name,
            fare_type: fare.fare_type,
            fare_amount: fare.fare_amount,
            status: fare.status,
            created_at: fare.created_at,
        }
    }
}
