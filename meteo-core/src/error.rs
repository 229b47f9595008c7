use thiserror::Error;

/// Everything that can end a weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Bad user input; raised before any request is sent.
    #[error("Invalid coordinates. {message}")]
    InvalidCoordinates { message: String },

    /// The request could not complete or the upstream answered with a non-2xx status.
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// A 2xx response that does not carry every field the report needs.
    #[error("Malformed forecast response: {message}")]
    MalformedResponse { message: String },
}

impl WeatherError {
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// Upstream HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Upstream response body, when a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
            body: None,
        }
    }
}
