use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized gender value: {0:?}")]
    InvalidSex(String),
}
