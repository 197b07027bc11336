use thiserror::Error;

/// Errors raised while collecting one measurement pass.
///
/// Every variant is terminal: the first error aborts the run, is printed on
/// stdout for the calling pipeline, and maps to a fixed process exit code
/// via [`MonitorError::exit_code`]. No partial output is ever emitted.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Invalid authentication.")]
    InvalidAuthentication,

    #[error("Wrong number of parameters.")]
    InvalidParametersNumber,

    #[error("Unknown host.")]
    UnknownHost,

    #[error("Unknown broker.")]
    UnknownBroker,

    /// Reserved in the exit-code taxonomy; current logic never raises it.
    #[error("Metric not found.")]
    MetricNotFound,

    #[error("Response error ({0}).")]
    Http(u16),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for amqmon operations
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns the process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidAuthentication => 2,
            Self::InvalidParametersNumber => 3,
            Self::MetricNotFound => 8,
            Self::UnknownHost => 28,
            Self::UnknownBroker => 32,
            Self::Http(_) | Self::Config(_) | Self::Parse(_) | Self::Transport(_) | Self::Io(_) => 1,
        }
    }
}
