//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL (ver sql/schema.sql).

pub mod fare;
pub mod program;
pub mod route;
pub mod schedule;

/// Estados de ciclo de vida compartidos por routes, schedules y fares.
/// Para programs el status es un string libre que viene del request.
pub const ACTIVE: &str = "ACTIVE";
pub const INACTIVE: &str = "INACTIVE";
