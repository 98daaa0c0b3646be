use thiserror::Error;

/// An event handler's failure. Propagating one of these aborts the
/// in-flight `publish` dispatch chain; the scheduler surfaces it as a
/// fatal tick error.
#[derive(Debug, Error)]
#[error("handler for topic '{topic}' failed: {message}")]
pub struct HandlerError {
    pub topic: String,
    pub message: String,
}

impl HandlerError {
    pub fn new(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            message: message.into(),
        }
    }
}
