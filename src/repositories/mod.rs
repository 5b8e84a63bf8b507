//! Repositorios de persistencia
//!
//! Cada entidad define su contrato de store como trait (la frontera que los
//! servicios consumen y los tests reemplazan por stores en memoria) y una
//! implementación `Pg*Repository` sobre el pool de PostgreSQL.
//!
//! `save` es insert-or-replace por id, el mismo contrato de un save de
//! document store: los servicios hacen find → mutar → save.

pub mod fare_repository;
pub mod program_repository;
pub mod route_repository;
pub mod schedule_repository;
