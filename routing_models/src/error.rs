use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ModelsResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error")]
    ParseError,

    #[error("Chain error: {0}")]
    ChainError(String),

    #[error("Currency error: {0}")]
    CurrencyError(String),
}
