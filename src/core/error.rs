use thiserror::Error;

#[derive(Error, Debug)]
pub enum BehaviorError {
    #[error("Field '{0}' with type JSON does not exist in the table '{1}'")]
    FieldNotFound(String, String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, BehaviorError>;

impl From<serde_json::Error> for BehaviorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}
