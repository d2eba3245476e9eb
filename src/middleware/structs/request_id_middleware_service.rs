use crate::logs::structs::logger::Logger;

pub struct RequestIdMiddlewareService<S> {
    pub(crate) service: S,
    pub(crate) logger: Logger,
}
