//! Modelo de Fare
//!
//! Tarifa de distribución. El monto se maneja con Decimal para evitar
//! redondeos de punto flotante.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fare {
    pub id: Uuid,
    pub organization_id: String,
    pub fare_code: String,
    pub fare_name: String,
    pub fare_type: String,
    pub fare_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
