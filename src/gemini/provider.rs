use crate::{
    error::Result,
    models::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;

/// One round-trip to a multimodal generation backend.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    fn name(&self) -> &str;
}
