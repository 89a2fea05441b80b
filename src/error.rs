use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    #[error("Missing or invalid user agent: {0}")]
    BadUserAgent(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Failure reported by the API itself, as opposed to a transport or
    /// decode problem. The collector ends pagination on these.
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            Error::BadCredentials(_)
                | Error::BadUserAgent(_)
                | Error::RateLimitExceeded(_)
                | Error::Api { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_kinds() {
        assert!(Error::BadCredentials("Bad credentials".into()).is_api_failure());
        assert!(Error::RateLimitExceeded("API rate limit exceeded".into()).is_api_failure());
        assert!(Error::Api {
            status: 500,
            message: "boom".into()
        }
        .is_api_failure());

        let decode = Error::Decode(serde_json::from_str::<u32>("not json").unwrap_err());
        assert!(!decode.is_api_failure());
        assert!(!Error::Config("bad window".into()).is_api_failure());
    }
}
