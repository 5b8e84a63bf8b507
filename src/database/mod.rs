//! Acceso a base de datos

pub mod connection;
