//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Every response field is optional: the provider may omit candidates,
//! content or parts, and the adapter has to cope with each absence.

use crate::models::{image::strip_data_url_prefix, ImagePayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Variant order matters for untagged decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Images first, in order, then the single text segment; image output only.
    /// Image data goes out as bare base64 whatever way the payload was built.
    pub fn image_edit(images: &[ImagePayload], text: impl Into<String>) -> Self {
        let mut parts: Vec<RequestPart> = images
            .iter()
            .map(|image| RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: strip_data_url_prefix(&image.encoded_data).to_string(),
                },
            })
            .collect();
        parts.push(RequestPart::Text { text: text.into() });

        Self {
            contents: vec![RequestContent { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        }
    }

    /// The text segment sent with this request, if any.
    pub fn text(&self) -> Option<&str> {
        self.contents
            .iter()
            .flat_map(|content| content.parts.iter())
            .find_map(|part| match part {
                RequestPart::Text { text } => Some(text.as_str()),
                RequestPart::InlineData { .. } => None,
            })
    }

    pub fn image_count(&self) -> usize {
        self.contents
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter(|part| matches!(part, RequestPart::InlineData { .. }))
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub inline_data: Option<ResponseInlineData>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    /// Base64 data of the first inline image in the first candidate.
    pub fn first_image_data(&self) -> Option<&str> {
        let candidate = self.candidates.as_ref()?.first()?;
        let parts = candidate.content.as_ref()?.parts.as_ref()?;
        parts.iter().find_map(|part| {
            let data = part.inline_data.as_ref()?.data.as_deref()?;
            if data.is_empty() {
                None
            } else {
                Some(data)
            }
        })
    }

    /// Text the provider sent instead of (or alongside) an image.
    pub fn text_reply(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;
        let text: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text.join(" "))
        }
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.as_ref()?.first()?.finish_reason.as_deref()
    }

    /// An image-only reply wrapping `data`.
    pub fn with_image(data: impl Into<String>) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: Some(ResponseContent {
                    parts: Some(vec![ResponsePart {
                        inline_data: Some(ResponseInlineData {
                            mime_type: Some("image/png".to_string()),
                            data: Some(data.into()),
                        }),
                        text: None,
                    }]),
                }),
                finish_reason: Some("STOP".to_string()),
            }]),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
