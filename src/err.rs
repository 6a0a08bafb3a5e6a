use std::error::Error;
use std::fmt;

/// Property Error
#[derive(Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// Definition is not in `key=value` form.
    InvalidDefinition(String),
    /// Command line arguments could not be read.
    ParseFail(String),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::InvalidDefinition(def) => {
                write!(f, "invalid property definition '{}'", def)
            }
            PropertyError::ParseFail(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PropertyError {}

#[cfg(feature = "enable_pico")]
impl From<pico_args::Error> for PropertyError {
    fn from(err: pico_args::Error) -> Self {
        PropertyError::ParseFail(err.to_string())
    }
}
