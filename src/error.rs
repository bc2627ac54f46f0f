//! Error types in Sylva
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("attribute {index} is not nominal")]
    NotNominal { index: usize },
    #[error("attribute index {index} out of range for a catalog of {len} attributes")]
    AttributeOutOfRange { index: usize, len: usize },
    #[error("example has {found} values, but the catalog declares {expected} attributes")]
    WrongExampleLength { expected: usize, found: usize },
    #[error("value {value} is not a domain index of nominal attribute {attribute}")]
    InvalidDomainValue { attribute: usize, value: f64 },
}
