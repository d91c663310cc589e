pub type BobbinResult<T> = Result<T, BobbinError>;

#[derive(thiserror::Error, Debug)]
pub enum BobbinError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("trace error: {0}")]
    Trace(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BobbinError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
