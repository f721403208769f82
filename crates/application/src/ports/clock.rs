/// Wall-clock source in milliseconds, injectable so throttling can be tested
/// without sleeping.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}
