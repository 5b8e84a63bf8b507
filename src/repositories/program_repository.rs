//! Repositorio de Program

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::program::Program;
use crate::utils::errors::AppResult;

/// Contrato de persistencia de programas
#[async_trait]
pub trait ProgramStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Program>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Program>>;
    /// Último programa por código en orden lexicográfico descendente
    async fn find_top_by_code_desc(&self) -> AppResult<Option<Program>>;
    async fn save(&self, program: Program) -> AppResult<Program>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgProgramRepository {
    pool: PgPool,
}

impl PgProgramRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramStore for PgProgramRepository {
    async fn find_all(&self) -> AppResult<Vec<Program>> {
        let programs =
            sqlx::query_as::<_, Program>("SELECT * FROM programs ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(programs)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Program>> {
        let program = sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(program)
    }

    async fn find_top_by_code_desc(&self) -> AppResult<Option<Program>> {
        // Orden lexicográfico sobre el código, no numérico: a partir de
        // PROG999 vs PROG1000 ambos órdenes divergen. Comportamiento
        // heredado del servicio original, se conserva tal cual.
        let program = sqlx::query_as::<_, Program>(
            "SELECT * FROM programs ORDER BY program_code DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(program)
    }

    async fn save(&self, program: Program) -> AppResult<Program> {
        let saved = sqlx::query_as::<_, Program>(
            r#"
            INSERT INTO programs (
                id, organization_id, program_code, schedule_id, route_id, zone_id,
                street_id, program_date, planned_start_time, planned_end_time,
                actual_start_time, actual_end_time, status, responsible_user_id,
                observations, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (id) DO UPDATE SET
                organization_id = EXCLUDED.organization_id,
                schedule_id = EXCLUDED.schedule_id,
                route_id = EXCLUDED.route_id,
                zone_id = EXCLUDED.zone_id,
                street_id = EXCLUDED.street_id,
                planned_start_time = EXCLUDED.planned_start_time,
                planned_end_time = EXCLUDED.planned_end_time,
                actual_start_time = EXCLUDED.actual_start_time,
                actual_end_time = EXCLUDED.actual_end_time,
                status = EXCLUDED.status,
                responsible_user_id = EXCLUDED.responsible_user_id,
                observations = EXCLUDED.observations
            RETURNING *
            "#,
        )
        .bind(program.id)
        .bind(program.organization_id)
        .bind(program.program_code)
        .bind(program.schedule_id)
        .bind(program.route_id)
        .bind(program.zone_id)
        .bind(program.street_id)
        .bind(program.program_date)
        .bind(program.planned_start_time)
        .bind(program.planned_end_time)
        .bind(program.actual_start_time)
        .bind(program.actual_end_time)
        .bind(program.status)
        .bind(program.responsible_user_id)
        .bind(program.observations)
        .bind(program.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
