//! Middleware implementations.

pub mod request_id_middleware;
pub mod request_id_middleware_service;
