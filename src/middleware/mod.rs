//! Request correlation middleware for actix-web.
//!
//! [`RequestIdMiddleware`](structs::request_id_middleware::RequestIdMiddleware)
//! reads the `X-Request-Id` header of every request and makes it visible to the
//! logger and to the error sink before the wrapped service runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpResponse};
//! use service_common::logs::structs::logger::Logger;
//! use service_common::middleware::structs::request_id_middleware::RequestIdMiddleware;
//!
//! let app = App::new()
//!     .wrap(RequestIdMiddleware::new(Logger::global(None).clone()))
//!     .route("/", web::get().to(|logger: web::ReqData<Logger>| async move {
//!         logger.info("handled");
//!         HttpResponse::Ok().finish()
//!     }));
//! ```

/// Middleware factory and per-worker service.
pub mod structs;

/// Transform and Service implementations.
pub mod impls;


/// Inbound header carrying the request identifier.
pub const HEADER_X_REQUEST_ID: &str = "X-Request-Id";

/// Tag name used on the error sink scope.
pub const TAG_X_REQUEST_ID: &str = "x-request-id";
