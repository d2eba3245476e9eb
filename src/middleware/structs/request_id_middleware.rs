use crate::logs::structs::logger::Logger;

#[derive(Debug, Clone)]
pub struct RequestIdMiddleware {
    pub(crate) logger: Logger,
}
