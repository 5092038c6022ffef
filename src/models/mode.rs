use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationMode {
    #[serde(rename = "extract")]
    Extract,
    #[serde(rename = "try-on")]
    TryOn,
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "upscale")]
    Upscale,
}

impl OperationMode {
    pub const ALL: [OperationMode; 4] = [
        OperationMode::Extract,
        OperationMode::TryOn,
        OperationMode::Edit,
        OperationMode::Upscale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Extract => "extract",
            OperationMode::TryOn => "try-on",
            OperationMode::Edit => "edit",
            OperationMode::Upscale => "upscale",
        }
    }

    /// Minimum number of images the mode's template refers to.
    pub fn required_images(&self) -> usize {
        match self {
            OperationMode::TryOn => 2,
            _ => 1,
        }
    }

    /// Upscale redraws the input as is; free text has no slot in its prompt.
    pub fn uses_user_text(&self) -> bool {
        !matches!(self, OperationMode::Upscale)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationMode::Extract => "Extract garment",
            OperationMode::TryOn => "Virtual try-on",
            OperationMode::Edit => "AI edit",
            OperationMode::Upscale => "Upscale & sharpen",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extract" => Ok(OperationMode::Extract),
            "try-on" | "tryon" | "try_on" => Ok(OperationMode::TryOn),
            "edit" => Ok(OperationMode::Edit),
            "upscale" => Ok(OperationMode::Upscale),
            other => Err(StudioError::InputError(format!("unknown mode '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_ids() {
        for mode in OperationMode::ALL {
            assert_eq!(mode.as_str().parse::<OperationMode>().unwrap(), mode);
        }
        assert!("admin".parse::<OperationMode>().is_err());
    }

    #[test]
    fn try_on_needs_two_images() {
        assert_eq!(OperationMode::TryOn.required_images(), 2);
        assert_eq!(OperationMode::Upscale.required_images(), 1);
    }

    #[test]
    fn only_upscale_ignores_user_text() {
        assert!(!OperationMode::Upscale.uses_user_text());
        assert!(OperationMode::Extract.uses_user_text());
        assert!(OperationMode::TryOn.uses_user_text());
        assert!(OperationMode::Edit.uses_user_text());
    }

    #[test]
    fn serializes_as_wire_id() {
        let json = serde_json::to_string(&OperationMode::TryOn).unwrap();
        assert_eq!(json, "\"try-on\"");
    }
}
