use thiserror::Error;

/// Fallback message used when the provider fails without saying why.
pub const UNKNOWN_PROVIDER_ERROR: &str = "Unknown error occurred during generation";

/// Message reported when the provider answered but returned no image.
pub const NO_IMAGE_GENERATED: &str = "No image generated in response.";

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Insufficient inputs: {0}")]
    InputError(String),
    /// Provider messages are passed through verbatim.
    #[error("{0}")]
    ProviderError(String),
    #[error("No image generated in response.")]
    EmptyResponse,
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Export error: {0}")]
    ExportError(String),
}

impl StudioError {
    /// Builds a provider error, substituting the generic fallback for blank messages.
    pub fn provider(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            StudioError::ProviderError(UNKNOWN_PROVIDER_ERROR.to_string())
        } else {
            StudioError::ProviderError(message)
        }
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_verbatim() {
        let err = StudioError::provider("quota exceeded");
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn blank_provider_message_falls_back() {
        let err = StudioError::provider("  ");
        assert_eq!(err.to_string(), UNKNOWN_PROVIDER_ERROR);
    }

    #[test]
    fn empty_response_message() {
        assert_eq!(StudioError::EmptyResponse.to_string(), NO_IMAGE_GENERATED);
    }
}
