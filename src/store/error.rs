use thiserror::Error;

use crate::api::ApiError;

/// Why a store mutation was rejected. State is unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Api(err) if err.is_not_found())
    }
}
