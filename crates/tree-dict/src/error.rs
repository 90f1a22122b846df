use bidi_list::ContainerError;
use thiserror::Error;

/// Failures of tree, cursor and map operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    #[error("key not found")]
    KeyNotFound,
    #[error("iterator does not point at an element")]
    InvalidIterator,
    #[error("container is empty")]
    EmptyContainer,
}

impl From<ContainerError> for DictError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::EmptyContainer => DictError::EmptyContainer,
            ContainerError::InvalidIterator => DictError::InvalidIterator,
        }
    }
}
