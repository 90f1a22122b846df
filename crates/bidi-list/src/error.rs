use thiserror::Error;

/// Failures of list and adapter operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("container is empty")]
    EmptyContainer,
    #[error("iterator does not point at an element")]
    InvalidIterator,
}
