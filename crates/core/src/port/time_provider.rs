// Clock Port
//
// Creation timestamps are assigned by the repository, so the clock is a
// port: tests inject a stepping clock to make ordering assertions
// deterministic, production wires the system clock.

/// Source of creation timestamps (milliseconds since epoch)
pub trait TimeProvider: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock provider used outside tests
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
