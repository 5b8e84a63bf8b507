//! Servicio de programas de distribución
//!
//! El código PROG### se genera a partir del último registro; la fecha del
//! programa se parsea estricta (`YYYY-MM-DD`) y un formato inválido corta la
//! creación antes de cualquier save.

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::program_dto::{ProgramCreateRequest, ProgramResponse};
use crate::models::program::Program;
use crate::models::{ACTIVE, INACTIVE};
use crate::repositories::program_repository::ProgramStore;
use crate::utils::codes::{next_code, PROGRAM_PREFIX};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation;

pub struct ProgramService<S> {
    store: S,
}

impl<S: ProgramStore> ProgramService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> AppResult<Vec<ProgramResponse>> {
        let programs = self.store.find_all().await?;
        Ok(programs.into_iter().map(ProgramResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ProgramResponse> {
        let program = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Program", &id.to_string()))?;
        Ok(program.into())
    }

    pub async fn create(&self, request: ProgramCreateRequest) -> AppResult<ProgramResponse> {
        request.validate()?;

        let program_date = validation::validate_date(&request.program_date)
            .map_err(|_| bad_request_error("programDate must be a valid date in YYYY-MM-DD format"))?;

        let code = self.generate_next_code().await?;

        let program = Program {
            id: Uuid::new_v4(),
            organization_id: request.organization_id,
            program_code: code,
            schedule_id: request.schedule_id,
            route_id: request.route_id,
            zone_id: request.zone_id,
            street_id: request.street_id,
            program_date,
            planned_start_time: request.planned_start_time,
            planned_end_time: request.planned_end_time,
            actual_start_time: request.actual_start_time,
            actual_end_time: request.actual_end_time,
            status: request.status,
            responsible_user_id: request.responsible_user_id,
            observations: request.observations,
            created_at: chrono::Utc::now(),
        };

        let saved = self.store.save(program).await?;
        info!("program created with code {}", saved.program_code);
        Ok(saved.into())
    }

    async fn generate_next_code(&self) -> AppResult<String> {
        let last = self.store.find_top_by_code_desc().await?;
        Ok(next_code(
            last.as_ref().map(|p| p.program_code.as_str()),
            PROGRAM_PREFIX,
        ))
    }

    /// Sobrescribe el subconjunto editable. El código, la fecha del programa
    /// y las referencias a schedule/route nunca se tocan en update.
    pub async fn update(&self, id: Uuid, request: ProgramCreateRequest) -> AppResult<ProgramResponse> {
        let mut program = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Program", &id.to_string()))?;

        program.organization_id = request.organization_id;
        program.zone_id = request.zone_id;
        program.street_id = request.street_id;
        program.planned_start_time = request.planned_start_time;
        program.planned_end_time = request.planned_end_time;
        program.actual_start_time = request.actual_start_time;
        program.actual_end_time = request.actual_end_time;
        program.status = request.status;
        program.observations = request.observations;
        program.responsible_user_id = request.responsible_user_id;

        let saved = self.store.save(program).await?;
        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Program", &id.to_string()))?;
        self.store.delete(id).await?;
        info!("program deleted: {}", id);
        Ok(())
    }

    pub async fn activate(&self, id: Uuid) -> AppResult<ProgramResponse> {
        self.change_status(id, ACTIVE).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<ProgramResponse> {
        self.change_status(id, INACTIVE).await
    }

    /// Siempre persiste, incluso si el status pedido es el actual.
    async fn change_status(&self, id: Uuid, status: &str) -> AppResult<ProgramResponse> {
        let mut program = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Program", &id.to_string()))?;

        program.status = status.to_string();
        let saved = self.store.save(program).await?;
        Ok(saved.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryProgramStore {
        programs: Mutex<Vec<Program>>,
        save_calls: Mutex<usize>,
        delete_calls: Mutex<usize>,
    }

    impl MemoryProgramStore {
        fn with(programs: Vec<Program>) -> Self {
            Self {
                programs: Mutex::new(programs),
                ..Default::default()
            }
        }

        fn save_calls(&self) -> usize {
            *self.save_calls.lock().unwrap()
        }

        fn delete_calls(&self) -> usize {
            *self.delete_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ProgramStore for MemoryProgramStore {
        async fn find_all(&self) -> AppResult<Vec<Program>> {
            Ok(self.programs.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Program>> {
            Ok(self
                .programs
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn find_top_by_code_desc(&self) -> AppResult<Option<Program>> {
            Ok(self
                .programs
                .lock()
                .unwrap()
                .iter()
                .max_by(|a, b| a.program_code.cmp(&b.program_code))
                .cloned())
        }

        async fn save(&self, program: Program) -> AppResult<Program> {
            *self.save_calls.lock().unwrap() += 1;
            let mut programs = self.programs.lock().unwrap();
            if let Some(existing) = programs.iter_mut().find(|p| p.id == program.id) {
                *existing = program.clone();
            } else {
                programs.push(program.clone());
            }
            Ok(program)
        }

        async fn delete(&self, id: Uuid) -> AppResult<()> {
            *self.delete_calls.lock().unwrap() += 1;
            self.programs.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    fn program_with_code(code: &str) -> Program {
        Program {
            id: Uuid::new_v4(),
            organization_id: "org-1".to_string(),
            program_code: code.to_string(),
            schedule_id: "sch-1".to_string(),
            route_id: "rt-1".to_string(),
            zone_id: "zn-1".to_string(),
            street_id: "st-1".to_string(),
            program_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            planned_start_time: "08:00".to_string(),
            planned_end_time: "12:00".to_string(),
            actual_start_time: None,
            actual_end_time: None,
            status: "PLANNED".to_string(),
            responsible_user_id: "usr-1".to_string(),
            observations: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn create_request() -> ProgramCreateRequest {
        ProgramCreateRequest {
            organization_id: "org-1".to_string(),
            schedule_id: "sch-1".to_string(),
            route_id: "rt-1".to_string(),
            zone_id: "zn-1".to_string(),
            street_id: "st-1".to_string(),
            program_date: "2024-01-02".to_string(),
            planned_start_time: "08:00".to_string(),
            planned_end_time: "12:00".to_string(),
            actual_start_time: None,
            actual_end_time: None,
            status: "PLANNED".to_string(),
            responsible_user_id: "usr-1".to_string(),
            observations: None,
        }
    }

    #[tokio::test]
    async fn test_create_first_program_gets_initial_code() {
        let service = ProgramService::new(MemoryProgramStore::default());
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.program_code, "PROG001");
        assert_eq!(response.program_date, "2024-01-02");
    }

    #[tokio::test]
    async fn test_create_increments_last_code() {
        let service =
            ProgramService::new(MemoryProgramStore::with(vec![program_with_code("PROG009")]));
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.program_code, "PROG010");
    }

    #[tokio::test]
    async fn test_create_with_malformed_last_code_falls_back_to_initial() {
        let service = ProgramService::new(MemoryProgramStore::with(vec![program_with_code("BAD")]));
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.program_code, "PROG001");
    }

    #[tokio::test]
    async fn test_create_with_invalid_date_fails_before_save() {
        let service = ProgramService::new(MemoryProgramStore::default());
        let mut request = create_request();
        request.program_date = "invalid-date".to_string();

        let error = service.create(request).await.unwrap_err();
        assert!(matches!(error, AppError::BadRequest(_)));
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let service = ProgramService::new(MemoryProgramStore::default());
        let error = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_program_is_not_found_without_write() {
        let service = ProgramService::new(MemoryProgramStore::default());
        let error = service
            .update(Uuid::new_v4(), create_request())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_never_touches_code_or_date() {
        let program = program_with_code("PROG005");
        let id = program.id;
        let service = ProgramService::new(MemoryProgramStore::with(vec![program]));

        let mut request = create_request();
        request.program_date = "2030-12-31".to_string();
        request.status = "IN_PROGRESS".to_string();

        let response = service.update(id, request).await.unwrap();
        assert_eq!(response.program_code, "PROG005");
        assert_eq!(response.program_date, "2024-01-02");
        assert_eq!(response.status, "IN_PROGRESS");
    }

    #[tokio::test]
    async fn test_change_status_always_writes_even_if_unchanged() {
        let mut program = program_with_code("PROG001");
        program.status = ACTIVE.to_string();
        let id = program.id;
        let service = ProgramService::new(MemoryProgramStore::with(vec![program]));

        let response = service.activate(id).await.unwrap();
        assert_eq!(response.status, ACTIVE);
        assert_eq!(service.store.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_program_is_not_found_without_delete_call() {
        let service = ProgramService::new(MemoryProgramStore::default());
        let error = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(service.store.delete_calls(), 0);
    }
}
