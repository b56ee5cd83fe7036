use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The upfront monitor enumeration failed. Nothing can be centered
    /// without displays, so this aborts the run.
    #[error("display enumeration failed: {0}")]
    DisplayEnumeration(String),

    #[error("window is not associated with any display")]
    DisplayNotFound,

    /// The window's geometry makes centering meaningless, e.g. it spans
    /// multiple displays or exceeds the display size.
    #[error("window geometry cannot be centered")]
    Unpositionable,

    #[error("could not resolve owning executable: {0}")]
    ExecutableQuery(String),

    #[error("failed to reposition window: {0}")]
    PositionSet(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
