use thiserror::Error;

use crate::http::ApiError;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Only admin can {0} songs!")]
    Denied(&'static str),

    #[error("Please enter a rating between 1-6 stars! (got {0:?})")]
    InvalidRating(String),

    #[error("Deletion not confirmed")]
    NotConfirmed,

    #[error("{0}")]
    InvalidUpload(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
