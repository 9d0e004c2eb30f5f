use thiserror::Error;

/// Errors that can arise when building the URLs a media is reachable at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceUrlError {
    #[error("Invalid API root \"{root}\": {source}")]
    InvalidRoot {
        root: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API root \"{0}\" cannot be extended with path segments")]
    CannotBeABase(String),
}

/// Errors returned when creating a `SourceController`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    SourceUrl(#[from] SourceUrlError),

    #[error("Initial level {index} is outside of the {len} published levels")]
    InvalidInitialLevel { index: usize, len: usize },
}
