use thiserror::Error;

/// Returned when a remote value that has not resolved yet is converted into a `Result`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Unresolved {
    #[error("remote value was never requested")]
    NotAsked,
    #[error("remote value is still loading")]
    Loading,
}
