//! Servicio de rutas de distribución

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::route_dto::{RouteCreateRequest, RouteResponse, RouteUpdateRequest};
use crate::models::route::Route;
use crate::models::{ACTIVE, INACTIVE};
use crate::repositories::route_repository::RouteStore;
use crate::utils::codes::{next_code, ROUTE_PREFIX};
use crate::utils::errors::{not_found_error, AppResult};

pub struct RouteService<S> {
    store: S,
}

impl<S: RouteStore> RouteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> AppResult<Vec<RouteResponse>> {
        let routes = self.store.find_all().await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn get_all_active(&self) -> AppResult<Vec<RouteResponse>> {
        let routes = self.store.find_all_by_status(ACTIVE).await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn get_all_inactive(&self) -> AppResult<Vec<RouteResponse>> {
        let routes = self.store.find_all_by_status(INACTIVE).await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RouteResponse> {
        let route = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;
        Ok(route.into())
    }

    pub async fn create(&self, request: RouteCreateRequest) -> AppResult<RouteResponse> {
        request.validate()?;

        let code = self.generate_next_code().await?;
        let zones = request
            .zones
            .into_iter()
            .map(|z| z.into_zone_order())
            .collect();

        let route = Route {
            id: Uuid::new_v4(),
            organization_id: request.organization_id,
            route_code: code,
            route_name: request.route_name,
            zones: Json(zones),
            total_estimated_duration: request.total_estimated_duration,
            responsible_user_id: request.responsible_user_id,
            status: ACTIVE.to_string(),
            created_at: Utc::now(),
        };

        let saved = self.store.save(route).await?;
        Ok(saved.into())
    }

    async fn generate_next_code(&self) -> AppResult<String> {
        let last = self.store.find_top_by_code_desc().await?;
        Ok(next_code(
            last.as_ref().map(|r| r.route_code.as_str()),
            ROUTE_PREFIX,
        ))
    }

    pub async fn update(&self, id: Uuid, request: RouteUpdateRequest) -> AppResult<RouteResponse> {
        request.validate()?;

        let mut route = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        route.route_name = request.route_name;
        route.zones = Json(
            request
                .zones
                .into_iter()
                .map(|z| z.into_zone_order())
                .collect(),
        );
        route.total_estimated_duration = request.total_estimated_duration;
        route.responsible_user_id = request.responsible_user_id;

        let saved = self.store.save(route).await?;
        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;
        self.store.delete(id).await
    }

    pub async fn activate(&self, id: Uuid) -> AppResult<RouteResponse> {
        self.change_status(id, ACTIVE).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<RouteResponse> {
        self.change_status(id, INACTIVE).await
    }

    /// Siempre persiste, incluso si el status pedido es el actual.
    async fn change_status(&self, id: Uuid, status: &str) -> AppResult<RouteResponse> {
        let mut route = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        route.status = status.to_string();
        let saved = self.store.save(route).await?;
        Ok(saved.into())
    }
}
