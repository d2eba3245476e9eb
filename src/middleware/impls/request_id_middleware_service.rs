use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::HttpMessage;
use crate::middleware::structs::request_id_middleware_service::RequestIdMiddlewareService;
use crate::middleware::{HEADER_X_REQUEST_ID, TAG_X_REQUEST_ID};

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let request_id = request
            .headers()
            .get(HEADER_X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // a request without the header clears the shared id instead of inheriting the previous one
        self.logger.set_request_id(&request_id);
        if !request_id.is_empty() {
            self.logger.sink().set_tag(TAG_X_REQUEST_ID, &request_id);
        }
        request.extensions_mut().insert(self.logger.bind_request_id(&request_id));

        self.service.call(request)
    }
}
