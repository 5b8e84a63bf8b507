//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y generación de códigos secuenciales.

pub mod codes;
pub mod errors;
pub mod validation;
