pub trait ClockPort: Send + Sync {
    /// Current wall-clock time as Unix epoch milliseconds.
    fn now_ms(&self) -> i64;
}
