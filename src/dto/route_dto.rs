//! DTOs de Route

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::route::{Route, ZoneOrder};

/// Entrada de zona dentro del request de ruta
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    pub zone_id: String,
    pub order: i32,
    /// Duración estimada en horas
    pub estimated_duration: i32,
}

/// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteCreateRequest {
    #[validate(length(min = 1))]
    pub organization_id: String,

    #[validate(length(min = 1))]
    pub route_name: String,

    #[validate(length(min = 1))]
    pub zones: Vec<ZoneEntry>,

    /// Duración total estimada en horas
    #[validate(range(min = 1))]
    pub total_estimated_duration: i32,

    #[validate(length(min = 1))]
    pub responsible_user_id: String,
}

/// Request para actualizar una ruta existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteUpdateRequest {
    #[validate(length(min = 1))]
    pub route_name: String,

    pub zones: Vec<ZoneEntry>,

    pub total_estimated_duration: i32,
    pub responsible_user_id: String,
}

/// Detalle de zona en la response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub zone_id: String,
    pub order: i32,
    pub estimated_duration: i32,
}

/// Response de ruta para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub id: Uuid,
    pub organization_id: String,
    pub route_code: String,
    pub route_name: String,
    pub zones: Vec<ZoneDetail>,
    pub total_estimated_duration: i32,
    pub responsible_user_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            organization_id: route.organization_id,
            route_code: route.route_code,
            route_name: route.route_name,
            zones: route
                .zones
                .0
                .into_iter()
                .map(|z| ZoneDetail {
                    zone_id: z.zone_id,
                    order: z.order,
                    estimated_duration: z.estimated_duration,
                })
                .collect(),
            total_estimated_duration: route.total_estimated_duration,
            responsible_user_id: route.responsible_user_id,
            status: route.status,
            created_at: route.created_at,
        }
    }
}

impl ZoneEntry {
    pub fn into_zone_order(self) -> ZoneOrder {
        ZoneOrder {
            zone_id: self.zone_id,
            order: self.order,
            estimated_duration: self.estimated_duration,
        }
    }
}
