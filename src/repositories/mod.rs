//! Repositorios de acceso a datos
//!
//! Envuelven el almacén SQLite; un repositorio por tabla.

pub mod route_repository;
pub mod schedule_repository;
