use moonphase_types::Generation;
use std::fmt;

/// Result type for moonphase-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// The calculation itself failed
    Engine(moonphase_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The calculation task is no longer running
    Stopped,

    /// A newer request replaced the one being awaited
    Superseded {
        requested: Generation,
        current: Generation,
    },

    /// The request is still animating or loading
    NotSettled(Generation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "Calculation failed: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Stopped => write!(f, "Calculation runtime has stopped"),
            Error::Superseded { requested, current } => write!(
                f,
                "Request {} was superseded by request {}",
                requested, current
            ),
            Error::NotSettled(generation) => {
                write!(f, "Request {} has not settled yet", generation)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Stopped | Error::Superseded { .. } | Error::NotSettled(_) => {
                None
            }
        }
    }
}

impl From<moonphase_engine::Error> for Error {
    fn from(err: moonphase_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
