use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{ready, Ready};
use crate::logs::structs::logger::Logger;
use crate::middleware::structs::request_id_middleware::RequestIdMiddleware;
use crate::middleware::structs::request_id_middleware_service::RequestIdMiddlewareService;

impl RequestIdMiddleware {
    pub fn new(logger: Logger) -> RequestIdMiddleware {
        RequestIdMiddleware { logger }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = RequestIdMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService {
            service,
            logger: self.logger.clone(),
        }))
    }
}
