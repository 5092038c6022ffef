use crate::error::{Result, StudioError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Base64 image data plus its MIME type, as handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub encoded_data: String,
    pub mime_type: String,
}

impl ImagePayload {
    /// Any `data:image/<x>;base64,` prefix on `encoded_data` is stripped.
    pub fn new(encoded_data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let encoded_data = encoded_data.into();
        Self {
            encoded_data: strip_data_url_prefix(&encoded_data).to_string(),
            mime_type: mime_type.into(),
        }
    }

    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            encoded_data: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Reads an image file; the MIME type comes from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_type_for(path).ok_or_else(|| {
            StudioError::InputError(format!("unsupported image type: {}", path.display()))
        })?;
        let bytes = fs::read(path).map_err(|e| {
            StudioError::InputError(format!("failed to read {}: {}", path.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(StudioError::InputError(format!(
                "image file is empty: {}",
                path.display()
            )));
        }

        log::debug!("📥 Loaded {} ({} bytes, {})", path.display(), bytes.len(), mime_type);
        Ok(Self::from_bytes(&bytes, mime_type))
    }

    /// Parses `data:<mime>;base64,<payload>`.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::InputError("not a data URL".into()))?;
        let (mime_type, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| StudioError::InputError("data URL is not base64 encoded".into()))?;
        if mime_type.is_empty() || data.is_empty() {
            return Err(StudioError::InputError("data URL has no content".into()));
        }
        Ok(Self {
            encoded_data: data.to_string(),
            mime_type: mime_type.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.encoded_data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.encoded_data.trim())
            .map_err(|e| StudioError::SerializationError(format!("invalid base64 image: {}", e)))
    }
}

/// Drops a `data:image/<x>;base64,` prefix, leaving bare base64 untouched.
pub(crate) fn strip_data_url_prefix(data: &str) -> &str {
    let Some(rest) = data.strip_prefix("data:image/") else {
        return data;
    };
    match rest.split_once(";base64,") {
        Some((subtype, payload)) if subtype.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            payload
        }
        _ => data,
    }
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn new_strips_data_url_prefix() {
        let payload = ImagePayload::new("data:image/jpeg;base64,AAAA", "image/jpeg");
        assert_eq!(payload.encoded_data, "AAAA");

        let untouched = ImagePayload::new("AAAA", "image/png");
        assert_eq!(untouched.encoded_data, "AAAA");
    }

    #[test]
    fn data_url_round_trip() {
        let payload = ImagePayload::from_data_url("data:image/webp;base64,UklGRg==").unwrap();
        assert_eq!(payload.mime_type, "image/webp");
        assert_eq!(payload.to_data_url(), "data:image/webp;base64,UklGRg==");
        assert!(ImagePayload::from_data_url("image/png;base64,AA").is_err());
        assert!(ImagePayload::from_data_url("data:image/png,AA").is_err());
    }

    #[test]
    fn reads_file_with_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.JPG");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xd8, 0xff]).unwrap();

        let payload = ImagePayload::from_file(&path).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.decode().unwrap(), vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(matches!(
            ImagePayload::from_file(&path),
            Err(StudioError::InputError(_))
        ));
    }
}
