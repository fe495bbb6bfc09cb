//! Módulo de base de datos
//!
//! Maneja la conexión y las migraciones del almacén SQLite local.

pub mod connection;

pub use connection::DatabaseConnection;
