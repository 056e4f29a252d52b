use std::fmt;

#[derive(Debug)]
pub enum RankingError {
    InvalidParameter(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RankingError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            RankingError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            RankingError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for RankingError {}

impl From<serde_json::Error> for RankingError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            RankingError::DeserializationError(err.to_string())
        } else {
            RankingError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;
