/// Error types for the translation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Missing or malformed configuration (API key, region)
    ConfigError(String),
    /// Transport-level failure while talking to the provider
    NetworkError(String),
    /// Provider accepted the request but could not produce a translation
    ProviderError(String),
    /// Malformed language code
    InvalidLocale(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TranslateError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TranslateError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            TranslateError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::NetworkError(err.to_string())
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
