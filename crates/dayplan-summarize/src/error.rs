use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// A limit was below its minimum of 1
    #[error("invalid argument: {name} must be at least 1 (got {value})")]
    InvalidArgument { name: &'static str, value: usize },
}
