//! Repositorio de Fare

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fare::Fare;
use crate::utils::errors::AppResult;

/// Contrato de persistencia de tarifas.
/// Es el único store con `exists_by_code`: la creación de tarifas verifica
/// colisiones del código generado antes de insertar.
#[async_trait]
pub trait FareStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Fare>>;
    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Fare>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Fare>>;
    /// Última tarifa por código en orden lexicográfico descendente
    async fn find_top_by_code_desc(&self) -> AppResult<Option<Fare>>;
    async fn exists_by_code(&self, code: &str) -> AppResult<bool>;
    async fn save(&self, fare: Fare) -> AppResult<Fare>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgFareRepository {
    pool: PgPool,
}

impl PgFareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FareStore for PgFareRepository {
    async fn find_all(&self) -> AppResult<Vec<Fare>> {
        let fares = sqlx::query_as::<_, Fare>("SELECT * FROM fares ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(fares)
    }

    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Fare>> {
        let fares = sqlx::query_as::<_, Fare>(
            "SELECT * FROM fares WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(fares)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Fare>> {
        let fare = sqlx::query_as::<_, Fare>("SELECT * FROM fares WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fare)
    }

    async fn find_top_by_code_desc(&self) -> AppResult<Option<Fare>> {
        // Orden lexicográfico, no numérico (ver program_repository)
        let fare = sqlx::query_as::<_, Fare>("SELECT * FROM fares ORDER BY fare_code DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(fare)
    }

    async fn exists_by_code(&self, code: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM fares WHERE fare_code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;
        Ok(result.0)
    }

    async fn save(&self, fare: Fare) -> AppResult<Fare> {
        let saved = sqlx::query_as::<_, Fare>(
            r#"
            INSERT INTO fares (
                id, organization_id, fare_code, fare_name, fare_type,
                fare_amount, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                organization_id = EXCLUDED.organization_id,
                fare_code = EXCLUDED.fare_code,
                fare_name = EXCLUDED.fare_name,
                fare_type = EXCLUDED.fare_type,
                fare_amount = EXCLUDED.fare_amount,
                status = EXCLUDED.status
            RETURNING *
            "#,
        )
        .bind(fare.id)
        .bind(fare.organization_id)
        .bind(fare.fare_code)
        .bind(fare.fare_name)
        .bind(fare.fare_type)
        .bind(fare.fare_amount)
        .bind(fare.status)
        .bind(fare.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM fares WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
