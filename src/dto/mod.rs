//! DTOs de request/response de la API
//!
//! Las formas de create y update son DTOs separados por entidad: schedule en
//! particular usa campos distintos en cada operación y no se modela con un
//! único record de opcionales. El wire format es camelCase, el contrato que
//! ya consumen los clientes del servicio.

pub mod fare_dto;
pub mod program_dto;
pub mod route_dto;
pub mod schedule_dto;

use serde::Serialize;

// Response genérica para operaciones de escritura
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
