use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    models::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

use super::provider::ImageProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_LOG_LIMIT: usize = 200;

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StudioError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "Google"),
            ("gemini-3-pro-image-preview", "Gemini 3 Pro Image (preview)", "Google"),
        ]
    }
}

/// Message for a non-success reply: the envelope's message when there is one,
/// otherwise the HTTP status line.
fn error_message(status: StatusCode, body: &str) -> String {
    let error = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error);

    if let Some(error) = &error {
        log::error!(
            "Gemini service error {} (code: {:?}, status: {})",
            status,
            error.code,
            error.status.as_deref().unwrap_or("-")
        );
    }

    match error.and_then(|error| error.message) {
        Some(message) if !message.trim().is_empty() => message,
        _ => {
            let snippet: String = body.trim().chars().take(ERROR_BODY_LOG_LIMIT).collect();
            log::error!("Gemini service error {} without error envelope: {}", status, snippet);
            status.to_string()
        }
    }
}

#[async_trait]
impl ImageProvider for ImageClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        // Resolved on every call, never cached.
        let api_key = self.config.resolve_api_key()?;
        let url = self.config.generate_url();

        log::info!("Generating image with model: {}", self.config.model);
        log::debug!(
            "Request carries {} image part(s), {} prompt chars",
            request.image_count(),
            request.text().map(str::len).unwrap_or(0)
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini transport error details: {:?}", e);
                StudioError::provider(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StudioError::provider(e.to_string()))?;

        if !status.is_success() {
            return Err(StudioError::provider(error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            StudioError::ProviderError(format!("Failed to parse provider response: {}", e))
        })
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::StudioClient;
    use crate::models::{FailureKind, GenerationRequest, ImagePayload, OperationMode};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP reply on a local port and hands back the raw request.
    async fn serve_once(status_line: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}/v1beta/models", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    fn client_for(endpoint: &str) -> ImageClient {
        ImageClient {
            client: Client::builder().no_proxy().build().unwrap(),
            config: GeminiConfig::new()
                .with_endpoint(endpoint)
                .with_model("m-test")
                .with_api_key("test-key"),
        }
    }

    fn upscale_request() -> GenerateContentRequest {
        GenerateContentRequest::image_edit(&[ImagePayload::new("AAAA", "image/png")], "upscale")
    }

    const IMAGE_REPLY: &str = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"iVBORw0KGgo="}}]},"finishReason":"STOP"}]}"#;

    #[tokio::test]
    async fn missing_credential_fails_before_the_network() {
        // Port 9 (discard) is never contacted: the key check comes first.
        let config = GeminiConfig::new()
            .with_endpoint("http://127.0.0.1:9")
            .with_api_key_vars(["FASHIONAI_TEST_NEVER_SET"]);
        let client = ImageClient::new(config).unwrap();

        match client.generate_content(&upscale_request()).await {
            Err(StudioError::ConfigError(msg)) => assert!(msg.contains("API key")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn posts_to_model_url_with_key_header() {
        let (endpoint, server) = serve_once("200 OK", "application/json", IMAGE_REPLY).await;
        let response = client_for(&endpoint)
            .generate_content(&upscale_request())
            .await
            .unwrap();
        let raw = server.await.unwrap();

        assert!(raw.starts_with("POST /v1beta/models/m-test:generateContent HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(raw.contains(r#""responseModalities":["IMAGE"]"#));
        assert_eq!(response.first_image_data(), Some("iVBORw0KGgo="));
    }

    #[tokio::test]
    async fn image_reply_becomes_success() {
        let (endpoint, server) = serve_once("200 OK", "application/json", IMAGE_REPLY).await;
        let studio = StudioClient::with_provider(Arc::new(client_for(&endpoint)));
        let request = GenerationRequest::new(
            OperationMode::Upscale,
            vec![ImagePayload::new("AAAA", "image/png")],
        );

        let result = studio.generate(request).await;
        server.await.unwrap();

        assert_eq!(result.image_data_uri(), Some("data:image/png;base64,iVBORw0KGgo="));
        assert!(result
            .composed_prompt()
            .unwrap()
            .starts_with("You are an expert in image restoration"));
    }

    #[tokio::test]
    async fn error_envelope_message_is_verbatim() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let (endpoint, server) = serve_once("400 Bad Request", "application/json", body).await;

        let result = client_for(&endpoint).generate_content(&upscale_request()).await;
        server.await.unwrap();

        match result {
            Err(StudioError::ProviderError(msg)) => {
                assert_eq!(msg, "API key not valid. Please pass a valid API key.")
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_envelope_error_reports_http_status() {
        let body = "<html><body><h1>503 Service Unavailable</h1></body></html>";
        let (endpoint, server) = serve_once("503 Service Unavailable", "text/html", body).await;
        let studio = StudioClient::with_provider(Arc::new(client_for(&endpoint)));
        let request = GenerationRequest::new(
            OperationMode::Edit,
            vec![ImagePayload::new("AAAA", "image/png")],
        );

        let result = studio.generate(request).await;
        server.await.unwrap();

        assert_eq!(result.failure_kind(), Some(FailureKind::Provider));
        assert_eq!(result.error(), Some("503 Service Unavailable"));
    }

    #[tokio::test]
    async fn unparsable_success_body_is_a_provider_error() {
        let (endpoint, server) = serve_once("200 OK", "application/json", "not json").await;

        let result = client_for(&endpoint).generate_content(&upscale_request()).await;
        server.await.unwrap();

        match result {
            Err(StudioError::ProviderError(msg)) => {
                assert!(msg.starts_with("Failed to parse provider response"))
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn error_message_prefers_envelope_then_status() {
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, r#"{"error":{"message":"Resource has been exhausted"}}"#),
            "Resource has been exhausted"
        );
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, r#"{"error":{"message":"  "}}"#),
            "429 Too Many Requests"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, ""), "502 Bad Gateway");
    }

    #[test]
    fn provider_name_is_the_model() {
        let client = ImageClient::new(GeminiConfig::new().with_model("m-test")).unwrap();
        assert_eq!(client.name(), "m-test");
        assert!(ImageClient::supported_models()
            .iter()
            .any(|(id, _, _)| *id == crate::config::DEFAULT_MODEL));
    }
}
