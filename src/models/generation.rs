use crate::error::StudioError;
use crate::models::{AspectRatio, ImagePayload, OperationMode, Resolution};
use serde::{Deserialize, Serialize};

/// Everything the composer needs for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub mode: OperationMode,
    pub images: Vec<ImagePayload>,
    pub user_text: String,
    pub preset_fragments: Vec<String>,
    pub strict: bool,
    pub aspect_ratio_directive: String,
    pub resolution_directive: String,
}

impl GenerationRequest {
    pub fn new(mode: OperationMode, images: Vec<ImagePayload>) -> Self {
        Self {
            mode,
            images,
            user_text: String::new(),
            preset_fragments: Vec::new(),
            strict: false,
            aspect_ratio_directive: AspectRatio::default().directive().to_string(),
            resolution_directive: Resolution::default().directive().to_string(),
        }
    }

    pub fn with_user_text(mut self, text: impl Into<String>) -> Self {
        self.user_text = text.into();
        self
    }

    pub fn with_presets<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset_fragments = fragments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_format(mut self, aspect_ratio: AspectRatio, resolution: Resolution) -> Self {
        self.aspect_ratio_directive = aspect_ratio.directive().to_string();
        self.resolution_directive = resolution.directive().to_string();
        self
    }

    /// Raw directives, for callers with their own wording.
    pub fn with_format_directives(
        mut self,
        aspect_ratio: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        self.aspect_ratio_directive = aspect_ratio.into();
        self.resolution_directive = resolution.into();
        self
    }

    /// Checks the image count against the mode before anything is composed.
    pub fn validate(&self) -> crate::error::Result<()> {
        let required = self.mode.required_images();
        if self.images.len() < required {
            return Err(StudioError::InputError(format!(
                "{} mode needs {} image(s), got {}",
                self.mode,
                required,
                self.images.len()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    Input,
    Provider,
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success {
        image_data_uri: String,
        composed_prompt: String,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }

    pub fn image_data_uri(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { image_data_uri, .. } => Some(image_data_uri),
            GenerationResult::Failure { .. } => None,
        }
    }

    pub fn composed_prompt(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { composed_prompt, .. } => Some(composed_prompt),
            GenerationResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationResult::Failure { message, .. } => Some(message),
            GenerationResult::Success { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationResult::Failure { kind, .. } => Some(*kind),
            GenerationResult::Success { .. } => None,
        }
    }
}

impl From<StudioError> for GenerationResult {
    fn from(error: StudioError) -> Self {
        let kind = match &error {
            StudioError::ConfigError(_) => FailureKind::Configuration,
            StudioError::InputError(_) => FailureKind::Input,
            StudioError::EmptyResponse => FailureKind::EmptyResponse,
            StudioError::ProviderError(_)
            | StudioError::SerializationError(_)
            | StudioError::StorageError(_)
            | StudioError::ExportError(_) => FailureKind::Provider,
        };
        GenerationResult::Failure {
            kind,
            message: error.to_string(),
        }
    }
}

/// JSON shape handed back to a shell: `{success, imageDataUri?, composedPrompt?, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composed_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&GenerationResult> for ServiceResponse {
    fn from(result: &GenerationResult) -> Self {
        match result {
            GenerationResult::Success {
                image_data_uri,
                composed_prompt,
            } => ServiceResponse {
                success: true,
                image_data_uri: Some(image_data_uri.clone()),
                composed_prompt: Some(composed_prompt.clone()),
                error: None,
            },
            GenerationResult::Failure { message, .. } => ServiceResponse {
                success: false,
                image_data_uri: None,
                composed_prompt: None,
                error: Some(message.clone()),
            },
        }
    }
}
