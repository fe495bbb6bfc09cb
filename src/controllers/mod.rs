//! Controladores
//!
//! Orquestan validación, repositorios y servicios por recurso.

pub mod route_controller;
pub mod schedule_controller;
