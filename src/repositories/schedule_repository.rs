//! Repositorio de Schedule

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::schedule::Schedule;
use crate::utils::errors::AppResult;

/// Contrato de persistencia de horarios
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Schedule>>;
    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Schedule>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Schedule>>;
    /// Último horario por código en orden lexicográfico descendente
    async fn find_top_by_code_desc(&self) -> AppResult<Option<Schedule>>;
    async fn save(&self, schedule: Schedule) -> AppResult<Schedule>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleRepository {
    async fn find_all(&self) -> AppResult<Vec<Schedule>> {
        let schedules =
            sqlx::query_as::<_, Schedule>("SELECT * FROM schedules ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(schedules)
    }

    async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Schedule>> {
        let schedules = sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(schedules)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Schedule>> {
        let schedule = sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(schedule)
    }

    async fn find_top_by_code_desc(&self) -> AppResult<Option<Schedule>> {
        // Orden lexicográfico, no numérico (ver program_repository)
        let schedule = sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules ORDER BY schedule_code DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(schedule)
    }

    async fn save(&self, schedule: Schedule) -> AppResult<Schedule> {
        let saved = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (
                id, organization_id, schedule_code, route_id, zone_id, schedule_name,
                days_of_week, day_of_week, start_time, end_time, duration_hours,
                estimated_duration, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                organization_id = EXCLUDED.organization_id,
                route_id = EXCLUDED.route_id,
                zone_id = EXCLUDED.zone_id,
                schedule_name = EXCLUDED.schedule_name,
                days_of_week = EXCLUDED.days_of_week,
                day_of_week = EXCLUDED.day_of_week,
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                duration_hours = EXCLUDED.duration_hours,
                estimated_duration = EXCLUDED.estimated_duration,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(schedule.id)
        .bind(schedule.organization_id)
        .bind(schedule.schedule_code)
        .bind(schedule.route_id)
        .bind(schedule.zone_id)
        .bind(schedule.schedule_name)
        .bind(schedule.days_of_week)
        .bind(schedule.day_of_week)
        .bind(schedule.start_time)
        .bind(schedule.end_time)
        .bind(schedule.duration_hours)
        .bind(schedule.estimated_duration)
        .bind(schedule.status)
        .bind(schedule.created_at)
        .bind(schedule.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
