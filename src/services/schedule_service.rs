//! Servicio de horarios de distribución
//!
//! Create y update trabajan con formas distintas (lista de días + horas
//! contra día único + minutos); el update además marca `updated_at`.

use chrono::Utc;
use sqlx::types::Json;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::schedule_dto::{ScheduleCreateRequest, ScheduleResponse, ScheduleUpdateRequest};
use crate::models::schedule::Schedule;
use crate::models::{ACTIVE, INACTIVE};
use crate::repositories::schedule_repository::ScheduleStore;
use crate::utils::codes::{next_code, SCHEDULE_PREFIX};
use crate::utils::errors::{not_found_error, AppResult};

pub struct ScheduleService<S> {
    store: S,
}

impl<S: ScheduleStore> ScheduleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> AppResult<Vec<ScheduleResponse>> {
        let schedules = self.store.find_all().await?;
        Ok(schedules.into_iter().map(ScheduleResponse::from).collect())
    }

    pub async fn get_all_active(&self) -> AppResult<Vec<ScheduleResponse>> {
        let schedules = self.store.find_all_by_status(ACTIVE).await?;
        Ok(schedules.into_iter().map(ScheduleResponse::from).collect())
    }

    pub async fn get_all_inactive(&self) -> AppResult<Vec<ScheduleResponse>> {
        let schedules = self.store.find_all_by_status(INACTIVE).await?;
        Ok(schedules.into_iter().map(ScheduleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ScheduleResponse> {
        let schedule = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", &id.to_string()))?;
        Ok(schedule.into())
    }

    pub async fn create(&self, request: ScheduleCreateRequest) -> AppResult<ScheduleResponse> {
        request.validate()?;

        let code = self.generate_next_code().await?;

        let schedule = Schedule {
            id: Uuid::new_v4(),
            organization_id: request.organization_id,
            schedule_code: code,
            route_id: request.route_id,
            zone_id: request.zone_id,
            schedule_name: request.schedule_name,
            days_of_week: Json(request.days_of_week),
            day_of_week: None,
            start_time: request.start_time,
            end_time: request.end_time,
            duration_hours: request.duration_hours,
            estimated_duration: None,
            status: ACTIVE.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let saved = self.store.save(schedule).await?;
        info!("schedule created with code {}", saved.schedule_code);
        Ok(saved.into())
    }

    async fn generate_next_code(&self) -> AppResult<String> {
        let last = self.store.find_top_by_code_desc().await?;
        Ok(next_code(
            last.as_ref().map(|s| s.schedule_code.as_str()),
            SCHEDULE_PREFIX,
        ))
    }

    /// Forma de update: día único y duración estimada en minutos.
    /// No toca days_of_week ni duration_hours de la creación.
    pub async fn update(
        &self,
        id: Uuid,
        request: ScheduleUpdateRequest,
    ) -> AppResult<ScheduleResponse> {
        request.validate()?;

        let mut schedule = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", &id.to_string()))?;

        schedule.route_id = request.route_id;
        schedule.day_of_week = Some(request.day_of_week);
        schedule.start_time = request.start_time;
        schedule.end_time = request.end_time;
        schedule.estimated_duration = Some(request.estimated_duration);
        schedule.updated_at = Some(Utc::now());

        let saved = self.store.save(schedule).await?;
        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", &id.to_string()))?;
        self.store.delete(id).await
    }

    pub async fn activate(&self, id: Uuid) -> AppResult<ScheduleResponse> {
        self.change_status(id, ACTIVE).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<ScheduleResponse> {
        self.change_status(id, INACTIVE).await
    }

    /// Siempre persiste, incluso si el status pedido es el actual.
    async fn change_status(&self, id: Uuid, status: &str) -> AppResult<ScheduleResponse> {
        let mut schedule = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", &id.to_string()))?;

        schedule.status = status.to_string();
        let saved = self.store.save(schedule).await?;
        Ok(saved.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryScheduleStore {
        schedules: Mutex<Vec<Schedule>>,
        save_calls: Mutex<usize>,
    }

    impl MemoryScheduleStore {
        fn with(schedules: Vec<Schedule>) -> Self {
            Self {
                schedules: Mutex::new(schedules),
                ..Default::default()
            }
        }

        fn save_calls(&self) -> usize {
            *self.save_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ScheduleStore for MemoryScheduleStore {
        async fn find_all(&self) -> AppResult<Vec<Schedule>> {
            Ok(self.schedules.lock().unwrap().clone())
        }

        async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Schedule>> {
            Ok(self
                .schedules
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.status == status)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Schedule>> {
            Ok(self
                .schedules
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .cloned())
        }

        async fn find_top_by_code_desc(&self) -> AppResult<Option<Schedule>> {
            Ok(self
                .schedules
                .lock()
                .unwrap()
                .iter()
                .max_by(|a, b| a.schedule_code.cmp(&b.schedule_code))
                .cloned())
        }

        async fn save(&self, schedule: Schedule) -> AppResult<Schedule> {
            *self.save_calls.lock().unwrap() += 1;
            let mut schedules = self.schedules.lock().unwrap();
            if let Some(existing) = schedules.iter_mut().find(|s| s.id == schedule.id) {
                *existing = schedule.clone();
            } else {
                schedules.push(schedule.clone());
            }
            Ok(schedule)
        }

        async fn delete(&self, id: Uuid) -> AppResult<()> {
            self.schedules.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }

    fn schedule_with_code(code: &str) -> Schedule {
        Schedule {
            id: Uuid::new_v4(),
            organization_id: "org-1".to_string(),
            schedule_code: code.to_string(),
            route_id: "rt-1".to_string(),
            zone_id: "zn-1".to_string(),
            schedule_name: "Turno mañana".to_string(),
            days_of_week: Json(vec!["MONDAY".to_string(), "WEDNESDAY".to_string()]),
            day_of_week: None,
            start_time: "08:00".to_string(),
            end_time: "12:00".to_string(),
            duration_hours: 4,
            estimated_duration: None,
            status: ACTIVE.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn create_request() -> ScheduleCreateRequest {
        ScheduleCreateRequest {
            organization_id: "org-1".to_string(),
            route_id: "rt-1".to_string(),
            zone_id: "zn-1".to_string(),
            schedule_name: "Turno mañana".to_string(),
            days_of_week: vec!["MONDAY".to_string(), "WEDNESDAY".to_string()],
            start_time: "08:00".to_string(),
            end_time: "12:00".to_string(),
            duration_hours: 4,
        }
    }

    #[tokio::test]
    async fn test_create_first_schedule_gets_initial_code() {
        let service = ScheduleService::new(MemoryScheduleStore::default());
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.schedule_code, "HOR001");
        assert_eq!(response.status, ACTIVE);
        assert!(response.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_create_increments_last_code() {
        let service =
            ScheduleService::new(MemoryScheduleStore::with(vec![schedule_with_code("HOR007")]));
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.schedule_code, "HOR008");
    }

    #[tokio::test]
    async fn test_update_uses_single_day_shape_and_bumps_updated_at() {
        let schedule = schedule_with_code("HOR001");
        let id = schedule.id;
        let service = ScheduleService::new(MemoryScheduleStore::with(vec![schedule]));

        let response = service
            .update(
                id,
                ScheduleUpdateRequest {
                    route_id: "rt-2".to_string(),
                    day_of_week: "FRIDAY".to_string(),
                    start_time: "14:00".to_string(),
                    end_time: "18:00".to_string(),
                    estimated_duration: 240,
                },
            )
            .await
            .unwrap();

        assert_eq!(response.day_of_week.as_deref(), Some("FRIDAY"));
        assert_eq!(response.estimated_duration, Some(240));
        assert!(response.updated_at.is_some());
        // La forma de creación queda intacta
        assert_eq!(response.days_of_week.len(), 2);
        assert_eq!(response.duration_hours, 4);
    }

    #[tokio::test]
    async fn test_change_status_always_writes_even_if_unchanged() {
        let schedule = schedule_with_code("HOR001");
        let id = schedule.id;
        let service = ScheduleService::new(MemoryScheduleStore::with(vec![schedule]));

        service.activate(id).await.unwrap();
        assert_eq!(service.store.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_schedule_is_not_found() {
        let service = ScheduleService::new(MemoryScheduleStore::default());
        let error = service
            .update(
                Uuid::new_v4(),
                ScheduleUpdateRequest {
                    route_id: "rt-1".to_string(),
                    day_of_week: "MONDAY".to_string(),
                    start_time: "08:00".to_string(),
                    end_time: "12:00".to_string(),
                    estimated_duration: 240,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(service.store.save_calls(), 0);
    }
}
