//! Services module
//!
//! Este módulo contiene la lógica de negocio: orquestación CRUD por entidad,
//! generación de códigos secuenciales, verificación de unicidad (tarifas) y
//! ciclo de vida de status. Los servicios son genéricos sobre el trait de
//! store de su entidad; los routers los instancian con el repositorio de
//! PostgreSQL.

pub mod fare_service;
pub mod program_service;
pub mod route_service;
pub mod schedule_service;
