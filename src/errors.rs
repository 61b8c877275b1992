use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadenciaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type CadenciaResult<T> = Result<T, CadenciaError>;

impl CadenciaError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn terminal_error(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
