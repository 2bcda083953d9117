pub trait HapticFeedbackPort: Send + Sync {
    /// Fire the success impact.
    fn impact(&self);
}
