use std::time::Duration;
use crate::cache::enums::expiry::Expiry;

impl From<Duration> for Expiry {
    fn from(ttl: Duration) -> Self {
        if ttl.is_zero() {
            Expiry::Never
        } else if ttl.subsec_nanos() == 0 {
            Expiry::Seconds(ttl.as_secs())
        } else {
            // sub-millisecond remainders still expire, at the next millisecond
            Expiry::Millis(ttl.as_millis().max(1) as u64)
        }
    }
}
