use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, key: impl Display) -> Self {
        Self::NotFound(format!("can't find {} by {}", entity, key))
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = ServiceError::not_found("cargo", "id 42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: can't find cargo by id 42");
    }

    #[test]
    fn db_errors_keep_their_message() {
        let err: ServiceError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, ServiceError::Db(ref m) if m.contains("boom")));
    }
}
