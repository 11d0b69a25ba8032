use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrewError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("HTTP request failed - status code returned = {status}")]
    HttpStatusError { status: u16 },

    #[error("Response body was empty")]
    EmptyBodyError,

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Mapping error: {message}")]
    MappingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CrewError {
    pub fn mapping(message: impl Into<String>) -> Self {
        CrewError::MappingError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrewError>;
