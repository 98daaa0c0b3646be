use sim_event::HandlerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("system '{system}' failed: {message}")]
    Failed { system: String, message: String },

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl SystemError {
    pub fn failed(system: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            system: system.into(),
            message: message.into(),
        }
    }
}

pub type SystemResult<T> = Result<T, SystemError>;
