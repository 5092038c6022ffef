pub mod image_client;
pub mod provider;

use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    logger,
    models::{GenerateContentRequest, GenerationRequest, GenerationResult},
    prompt::{self, RandomVariation, VariationSource},
};
use std::sync::Arc;
use uuid::Uuid;

pub use image_client::ImageClient;
pub use provider::ImageProvider;

/// Composes the prompt for a request, sends it once, and folds the reply
/// (or any failure) into a [`GenerationResult`].
#[derive(Clone)]
pub struct StudioClient {
    provider: Arc<dyn ImageProvider>,
    variation: Arc<dyn VariationSource>,
}

impl StudioClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = ImageClient::new(config)?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    pub fn with_provider(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            provider,
            variation: Arc::new(RandomVariation),
        }
    }

    pub fn with_variation_source(mut self, variation: Arc<dyn VariationSource>) -> Self {
        self.variation = variation;
        self
    }

    /// Never returns an error: every failure comes back as `Failure`.
    pub async fn generate(&self, request: GenerationRequest) -> GenerationResult {
        let generation_id = Uuid::new_v4().to_string();
        let _timer = logger::timer(&format!("generate {} [{}]", request.mode, generation_id));

        match self.try_generate(&request).await {
            Ok(result) => {
                log::info!("✅ {} generation succeeded [{}]", request.mode, generation_id);
                result
            }
            Err(e) => {
                log::error!("❌ {} generation failed [{}]: {}", request.mode, generation_id, e);
                GenerationResult::from(e)
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        request.validate()?;

        let composed = prompt::compose(request);
        let composed_prompt = composed.text();
        let token = self.variation.next_token();
        let outgoing = composed.with_variation(token);

        log::debug!(
            "Composed {} prompt ({} chars, {} preset fragment(s), strict: {})",
            request.mode,
            composed_prompt.len(),
            request.preset_fragments.len(),
            request.strict
        );

        let payload = GenerateContentRequest::image_edit(&request.images, outgoing);
        let response = self.provider.generate_content(&payload).await?;

        match response.first_image_data() {
            Some(data) => Ok(GenerationResult::Success {
                image_data_uri: format!("data:image/png;base64,{}", data),
                composed_prompt,
            }),
            None => {
                if let Some(text) = response.text_reply() {
                    log::warn!("⚠️  Provider replied with text only: {}", text);
                }
                if let Some(reason) = response.finish_reason() {
                    log::warn!("⚠️  Finish reason: {}", reason);
                }
                Err(StudioError::EmptyResponse)
            }
        }
    }
}
