//! Middleware structures.

/// Factory registered with `App::wrap`.
pub mod request_id_middleware;

/// Service instance created per worker.
pub mod request_id_middleware_service;
