use crate::error::StudioError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "3:4")]
    Photo,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Vertical,
        AspectRatio::Wide,
        AspectRatio::Portrait,
        AspectRatio::Photo,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Wide => "16:9",
            AspectRatio::Portrait => "4:5",
            AspectRatio::Photo => "3:4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1) - Instagram/Avatar",
            AspectRatio::Vertical => "Vertical (9:16) - TikTok/Reels/Story",
            AspectRatio::Wide => "Wide (16:9) - YouTube/Web",
            AspectRatio::Portrait => "Portrait (4:5) - FB/Insta Post",
            AspectRatio::Photo => "Vertical (3:4) - Photo Standard",
        }
    }

    /// Prompt directive embedded in the format clause.
    pub fn directive(&self) -> &'static str {
        match self {
            AspectRatio::Square => "composition with square aspect ratio 1:1",
            AspectRatio::Vertical => "composition with vertical portrait aspect ratio 9:16",
            AspectRatio::Wide => "composition with wide cinematic aspect ratio 16:9",
            AspectRatio::Portrait => "composition with vertical aspect ratio 4:5",
            AspectRatio::Photo => "composition with vertical aspect ratio 3:4",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.id() == s.trim())
            .ok_or_else(|| StudioError::InputError(format!("unknown aspect ratio '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Standard,
    #[default]
    High,
    Ultra,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Standard, Resolution::High, Resolution::Ultra];

    pub fn id(&self) -> &'static str {
        match self {
            Resolution::Standard => "standard",
            Resolution::High => "high",
            Resolution::Ultra => "ultra",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Standard => "Standard",
            Resolution::High => "High Quality",
            Resolution::Ultra => "Ultra HD",
        }
    }

    pub fn directive(&self) -> &'static str {
        match self {
            Resolution::Standard => "standard resolution, clear details",
            Resolution::High => "high resolution, 4k, highly detailed textures, sharp focus",
            Resolution::Ultra => {
                "8k ultra hd, masterpiece, hyper-realistic, intricate details, professional photography"
            }
        }
    }
}

impl FromStr for Resolution {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Resolution::ALL
            .into_iter()
            .find(|res| res.id() == wanted)
            .ok_or_else(|| StudioError::InputError(format!("unknown resolution '{}'", s)))
    }
}
