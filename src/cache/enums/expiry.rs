/// How a value written with a given TTL expires.
///
/// `Never` maps to `SET`, `Seconds` to `SETEX` and `Millis` to `PSETEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Never,
    Seconds(u64),
    Millis(u64),
}
