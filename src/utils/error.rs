use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReputationError {
    #[error("seller_id is required in the request body")]
    MissingSellerId,

    #[error("review query failed (status {status}): {message}")]
    StoreRead { status: u16, message: String },

    #[error("profile update failed (status {status}): {message}")]
    StoreWrite { status: u16, message: String },

    #[error("store request failed: {0}")]
    Api(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ReputationError>;
