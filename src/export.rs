use crate::{
    error::{Result, StudioError},
    models::{ImagePayload, OperationMode},
};
use std::fs;
use std::path::{Path, PathBuf};

pub fn export_file_name(mode: OperationMode, timestamp_millis: i64) -> String {
    format!("fashion-ai-{}-{}.png", mode, timestamp_millis)
}

/// Decodes a generated data URI and writes it into `dir`.
pub fn save_image(data_uri: &str, dir: impl AsRef<Path>, mode: OperationMode) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let payload = ImagePayload::from_data_url(data_uri)
        .map_err(|e| StudioError::ExportError(e.to_string()))?;
    let bytes = payload
        .decode()
        .map_err(|e| StudioError::ExportError(e.to_string()))?;

    fs::create_dir_all(dir)
        .map_err(|e| StudioError::ExportError(format!("failed to create {}: {}", dir.display(), e)))?;
    let path = dir.join(export_file_name(mode, chrono::Utc::now().timestamp_millis()));
    fs::write(&path, &bytes)
        .map_err(|e| StudioError::ExportError(format!("failed to write {}: {}", path.display(), e)))?;

    log::info!("💾 Image saved to: {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_pattern() {
        assert_eq!(
            export_file_name(OperationMode::TryOn, 1700000000000),
            "fashion-ai-try-on-1700000000000.png"
        );
    }

    #[test]
    fn writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let payload = ImagePayload::from_bytes(&[137, 80, 78, 71], "image/png");
        let path = save_image(&payload.to_data_url(), dir.path(), OperationMode::Upscale).unwrap();

        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("fashion-ai-upscale-"));
        assert_eq!(std::fs::read(path).unwrap(), vec![137, 80, 78, 71]);
    }

    #[test]
    fn rejects_non_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            save_image("https://example.com/x.png", dir.path(), OperationMode::Edit),
            Err(StudioError::ExportError(_))
        ));
    }
}
