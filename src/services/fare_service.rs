//! Servicio de tarifas
//!
//! Única entidad con guardia de unicidad sobre el código generado: entre la
//! verificación `exists_by_code` y el insert hay una ventana de carrera que
//! este diseño no cierra (el índice único de la base es la red de seguridad).

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::dto::fare_dto::{FareCreateRequest, FareResponse, FareUpdateRequest};
use crate::models::fare::Fare;
use crate::models::{ACTIVE, INACTIVE};
use crate::repositories::fare_repository::FareStore;
use crate::utils::codes::{next_code, FARE_PREFIX};
use crate::utils::errors::{bad_request_error, conflict_error, not_found_error, AppResult};
use crate::utils::validation;

pub struct FareService<S> {
    store: S,
}

impl<S: FareStore> FareService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> AppResult<Vec<FareResponse>> {
        let fares = self.store.find_all().await?;
        Ok(fares.into_iter().map(FareResponse::from).collect())
    }

    pub async fn get_all_active(&self) -> AppResult<Vec<FareResponse>> {
        let fares = self.store.find_all_by_status(ACTIVE).await?;
        Ok(fares.into_iter().map(FareResponse::from).collect())
    }

    pub async fn get_all_inactive(&self) -> AppResult<Vec<FareResponse>> {
        let fares = self.store.find_all_by_status(INACTIVE).await?;
        Ok(fares.into_iter().map(FareResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<FareResponse> {
        let fare = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fare", &id.to_string()))?;
        debug!("fare found with id {}", id);
        Ok(fare.into())
    }

    /// Crea una tarifa con código TAR### generado.
    /// La validación corre antes de cualquier acceso al store; la colisión
    /// de código aborta la creación sin llamar a save.
    pub async fn create(&self, request: FareCreateRequest) -> AppResult<FareResponse> {
        validate_create_request(&request)?;

        let code = self.generate_next_code().await?;
        if self.store.exists_by_code(&code).await? {
            warn!("attempt to create fare with existing code {}", code);
            return Err(conflict_error("Fare", "code", &code));
        }

        let fare = Fare {
            id: Uuid::new_v4(),
            organization_id: request.organization_id,
            fare_code: code,
            fare_name: request.fare_name,
            fare_type: request.fare_type,
            fare_amount: request.fare_amount,
            status: ACTIVE.to_string(),
            created_at: Utc::now(),
        };

        let saved = self.store.save(fare).await?;
        info!("fare created with code {}", saved.fare_code);
        Ok(saved.into())
    }

    async fn generate_next_code(&self) -> AppResult<String> {
        let last = self.store.find_top_by_code_desc().await?;
        let code = next_code(last.as_ref().map(|f| f.fare_code.as_str()), FARE_PREFIX);
        debug!("generated fare code {}", code);
        Ok(code)
    }

    /// Actualiza código y monto. `description` llega en el request por
    /// compatibilidad pero no se persiste: el modelo no tiene ese campo.
    pub async fn update(&self, id: Uuid, request: FareUpdateRequest) -> AppResult<FareResponse> {
        let mut fare = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fare", &id.to_string()))?;

        if let Some(code) = request.fare_code {
            fare.fare_code = code;
        }
        if let Some(price) = request.price {
            fare.fare_amount = Decimal::from_f64_retain(price)
                .ok_or_else(|| bad_request_error("price must be a valid number"))?;
        }

        let saved = self.store.save(fare).await?;
        info!("fare updated: {}", id);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fare", &id.to_string()))?;
        self.store.delete(id).await?;
        info!("fare deleted: {}", id);
        Ok(())
    }

    pub async fn activate(&self, id: Uuid) -> AppResult<FareResponse> {
        self.change_status(id, ACTIVE).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<FareResponse> {
        self.change_status(id, INACTIVE).await
    }

    /// Cambio de status con atajo: si el status pedido es el actual no hay
    /// escritura (a diferencia de programas, rutas y horarios, que siempre
    /// persisten).
    async fn change_status(&self, id: Uuid, new_status: &str) -> AppResult<FareResponse> {
        let mut fare = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fare", &id.to_string()))?;

        if fare.status == new_status {
            debug!("fare {} already has status {}", id, new_status);
            return Ok(fare.into());
        }

        info!(
            "changing fare {} status from {} to {}",
            id, fare.status, new_status
        );
        fare.status = new_status.to_string();
        let saved = self.store.save(fare).await?;
        Ok(saved.into())
    }
}

fn validate_create_request(request: &FareCreateRequest) -> AppResult<()> {
    if validation::validate_not_empty(&request.organization_id).is_err() {
        return Err(bad_request_error("Organization ID is required"));
    }
    if validation::validate_not_empty(&request.fare_name).is_err() {
        return Err(bad_request_error("Fare name is required"));
    }
    if request.fare_amount <= Decimal::ZERO {
        return Err(bad_request_error("Fare amount must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryFareStore {
        fares: Mutex<Vec<Fare>>,
        save_calls: Mutex<usize>,
        delete_calls: Mutex<usize>,
    }

    impl MemoryFareStore {
        fn with(fares: Vec<Fare>) -> Self {
            Self {
                fares: Mutex::new(fares),
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
    impl FareStore for MemoryFareStore {
        async fn find_all(&self) -> AppResult<Vec<Fare>> {
            Ok(self.fares.lock().unwrap().clone())
        }

        async fn find_all_by_status(&self, status: &str) -> AppResult<Vec<Fare>> {
            Ok(self
                .fares
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.status == status)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Fare>> {
            Ok(self
                .fares
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.id == id)
                .cloned())
        }

        async fn find_top_by_code_desc(&self) -> AppResult<Option<Fare>> {
            Ok(self
                .fares
                .lock()
                .unwrap()
                .iter()
                .max_by(|a, b| a.fare_code.cmp(&b.fare_code))
                .cloned())
        }

        async fn exists_by_code(&self, code: &str) -> AppResult<bool> {
            Ok(self
                .fares
                .lock()
                .unwrap()
                .iter()
                .any(|f| f.fare_code == code))
        }

        async fn save(&self, fare: Fare) -> AppResult<Fare> {
            *self.save_calls.lock().unwrap() += 1;
            let mut fares = self.fares.lock().unwrap();
            if let Some(existing) = fares.iter_mut().find(|f| f.id == fare.id) {
                *existing = fare.clone();
            } else {
                fares.push(fare.clone());
            }
            Ok(fare)
        }

        async fn delete(&self, id: Uuid) -> AppResult<()> {
            *self.delete_calls.lock().unwrap() += 1;
            self.fares.lock().unwrap().retain(|f| f.id != id);
            Ok(())
        }
    }

    fn fare_with_code(code: &str) -> Fare {
        Fare {
            id: Uuid::new_v4(),
            organization_id: "org-1".to_string(),
            fare_code: code.to_string(),
            fare_name: "Tarifa base".to_string(),
            fare_type: "STANDARD".to_string(),
            fare_amount: Decimal::new(2550, 2),
            status: ACTIVE.to_string(),
            created_at: Utc::now(),
        }
    }

    fn create_request() -> FareCreateRequest {
        FareCreateRequest {
            organization_id: "org-1".to_string(),
            fare_name: "Tarifa base".to_string(),
            fare_type: "STANDARD".to_string(),
            fare_amount: Decimal::new(2550, 2),
        }
    }

    #[tokio::test]
    async fn test_create_first_fare_gets_initial_code() {
        let service = FareService::new(MemoryFareStore::default());
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.fare_code, "TAR001");
        assert_eq!(response.status, ACTIVE);
    }

    #[tokio::test]
    async fn test_create_increments_last_code() {
        let service = FareService::new(MemoryFareStore::with(vec![fare_with_code("TAR099")]));
        let response = service.create(create_request()).await.unwrap();
        assert_eq!(response.fare_code, "TAR100");
    }

    #[tokio::test]
    async fn test_create_fails_when_generated_code_already_exists() {
        // TAR099 es el máximo lexicográfico, pero TAR100 ya está ocupado
        let service = FareService::new(MemoryFareStore::with(vec![
            fare_with_code("TAR099"),
            fare_with_code("TAR100"),
        ]));
        let before = service.store.save_calls();

        let error = service.create(create_request()).await.unwrap_err();
        match error {
            AppError::Conflict(msg) => assert!(msg.contains("TAR100")),
            other => panic!("expected Conflict, got {:?}", other),
        }
        assert_eq!(service.store.save_calls(), before, "save must not be called");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_organization_before_store_access() {
        let service = FareService::new(MemoryFareStore::default());
        let mut request = create_request();
        request.organization_id = "   ".to_string();

        let error = service.create(request).await.unwrap_err();
        assert!(matches!(error, AppError::BadRequest(_)));
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = FareService::new(MemoryFareStore::default());
        let mut request = create_request();
        request.fare_name = "".to_string();
        assert!(service.create(request).await.is_err());
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amount() {
        let service = FareService::new(MemoryFareStore::default());
        let mut request = create_request();
        request.fare_amount = Decimal::ZERO;
        assert!(service.create(request).await.is_err());

        let mut request = create_request();
        request.fare_amount = Decimal::new(-100, 2);
        assert!(service.create(request).await.is_err());
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_change_status_to_same_status_performs_no_write() {
        let fare = fare_with_code("TAR001");
        let id = fare.id;
        let service = FareService::new(MemoryFareStore::with(vec![fare]));

        let response = service.activate(id).await.unwrap();
        assert_eq!(response.status, ACTIVE);
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_change_status_to_new_status_writes() {
        let fare = fare_with_code("TAR001");
        let id = fare.id;
        let service = FareService::new(MemoryFareStore::with(vec![fare]));

        let response = service.deactivate(id).await.unwrap();
        assert_eq!(response.status, INACTIVE);
        assert_eq!(service.store.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_ignores_description() {
        let fare = fare_with_code("TAR001");
        let id = fare.id;
        let service = FareService::new(MemoryFareStore::with(vec![fare]));

        let response = service
            .update(
                id,
                FareUpdateRequest {
                    fare_code: Some("TAR777".to_string()),
                    price: Some(99.5),
                    description: Some("se acepta pero no se guarda".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.fare_code, "TAR777");
        assert_eq!(response.fare_amount, Decimal::from_f64_retain(99.5).unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_fare_is_not_found_without_write() {
        let service = FareService::new(MemoryFareStore::default());
        let error = service
            .update(
                Uuid::new_v4(),
                FareUpdateRequest {
                    fare_code: None,
                    price: None,
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(service.store.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_fare_is_not_found_without_delete_call() {
        let service = FareService::new(MemoryFareStore::default());
        let error = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(service.store.delete_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_all_by_status_filters() {
        let mut inactive = fare_with_code("TAR002");
        inactive.status = INACTIVE.to_string();
        let service =
            FareService::new(MemoryFareStore::with(vec![fare_with_code("TAR001"), inactive]));

        assert_eq!(service.get_all().await.unwrap().len(), 2);
        assert_eq!(service.get_all_active().await.unwrap().len(), 1);
        assert_eq!(service.get_all_inactive().await.unwrap().len(), 1);
    }
}
