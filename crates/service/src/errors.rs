use sea_orm::DbErr;
use thiserror::Error;
use tracing::{error, warn};

use models::errors::{is_constraint_violation, store_message};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required body field was absent.
    #[error("Please provide all inputs")]
    MissingInputs,
    /// The addressed row does not exist; carries the resource label.
    #[error("{0} cannot be found")]
    NotFound(&'static str),
    /// The store rejected the statement; carries its message verbatim.
    #[error("{0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str) -> Self { Self::NotFound(entity) }

    pub fn store(err: DbErr) -> Self {
        let message = store_message(&err);
        if is_constraint_violation(&err) {
            warn!(%message, "store constraint violation");
        } else {
            error!(%message, "store failure");
        }
        Self::Store(message)
    }

    /// Raised by handler logic with a known message, as opposed to store failures.
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
