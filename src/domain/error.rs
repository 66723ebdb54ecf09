use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{metric} is undefined: {denominator} is zero")]
    UndefinedMetric {
        metric: &'static str,
        denominator: &'static str,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn invalid_input(field: &str, reason: &str) -> Self {
        DomainError::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
