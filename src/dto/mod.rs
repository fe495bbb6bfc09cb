//! DTOs de la API
//!
//! Requests y responses serializables de la capa HTTP.

pub mod route_dto;
pub mod schedule_dto;
