use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationErrors;

/// A failed console command. Printed, never fatal.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{label} '{id}' is not in the loaded list")]
    NotLoaded { label: &'static str, id: String },
}
