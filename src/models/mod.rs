//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite
//! del almacén local.

pub mod route;
pub mod schedule;
