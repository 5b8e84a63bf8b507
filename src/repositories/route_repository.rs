//! Repositorio de Route

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppResult;

/// Contrato de persistencia de rutas
#[async_trait]
pub trait RouteStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Route>>;
    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Route>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Route>>;
    /// Última ruta por código en orden lexicográfico descendente
    async fn find_top_by_code_desc(&self) -> AppResult<Option<Route>>;
    async fn save(&self, route: Route) -> AppResult<Route>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgRouteRepository {
    pool: PgPool,
}

impl PgRouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for PgRouteRepository {
    async fn find_all(&self) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(routes)
    }

    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(routes)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Route>> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(route)
    }

    async fn find_top_by_code_desc(&self) -> AppResult<Option<Route>> {
        // Orden lexicográfico, no numérico (ver program_repository)
        let route =
            sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY route_code DESC LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(route)
    }

    async fn save(&self, route: Route) -> AppResult<Route> {
        let saved = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (
                id, organization_id, route_code, route_name, zones,
                total_estimated_duration, responsible_user_id, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                organization_id = EXCLUDED.organization_id,
                route_name = EXCLUDED.route_name,
                zones = EXCLUDED.zones,
                total_estimated_duration = EXCLUDED.total_estimated_duration,
                responsible_user_id = EXCLUDED.responsible_user_id,
                status = EXCLUDED.status
            RETURNING *
            "#,
        )
        .bind(route.id)
        .bind(route.organization_id)
        .bind(route.route_code)
        .bind(route.route_name)
        .bind(route.zones)
        .bind(route.total_estimated_duration)
        .bind(route.responsible_user_id)
        .bind(route.status)
        .bind(route.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
