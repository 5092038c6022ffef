use crate::error::StudioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Style,
    Background,
    Lighting,
    Pose,
    Angle,
    Expression,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 6] = [
        PresetCategory::Style,
        PresetCategory::Background,
        PresetCategory::Pose,
        PresetCategory::Lighting,
        PresetCategory::Angle,
        PresetCategory::Expression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetCategory::Style => "style",
            PresetCategory::Background => "background",
            PresetCategory::Lighting => "lighting",
            PresetCategory::Pose => "pose",
            PresetCategory::Angle => "angle",
            PresetCategory::Expression => "expression",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetCategory {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PresetCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| StudioError::InputError(format!("unknown preset category '{}'", s)))
    }
}

/// One catalog entry. Field names match the stored JSON (`promptDetail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub prompt_detail: String,
    pub category: PresetCategory,
}

// (id, label, description, prompt detail, category)
const BUILT_IN: &[(&str, &str, &str, &str, PresetCategory)] = &[
    ("style-realism", "Ultra-Realistic", "Everyday phone-camera look, fully authentic.",
     "raw amateur photography, shot on iPhone 15 Pro, authentic look, unfiltered, skin texture imperfections, natural messy hair, realistic lighting, candid snapshot, 4k, hyper-realistic, not AI generated look, hard flash, imperfect composition",
     PresetCategory::Style),
    ("style-cartoon", "Cartoon 3D", "Pixar/Disney 3D or kid-friendly superhero style.",
     "3D disney pixar animation style, superhero comic cover art, vibrant colors, exaggerated features, smooth rendering, fantasy atmosphere, magical lighting, action-packed, cgi render, octane render, cute and heroic",
     PresetCategory::Style),
    ("style-cinematic", "Cinematic", "Film color, cinematic framing, dramatic light.",
     "cinematic movie scene, anamorphic lens, teal and orange color grading, dramatic composition, film grain, motion picture look, atmospheric depth, blockbuster movie aesthetic, volumetric lighting",
     PresetCategory::Style),
    ("style-minimalist", "Minimalist", "Luxurious, clean lines, nothing superfluous.",
     "high-end fashion photography, minimalist aesthetic, clean lines, neutral color palette, soft contrast, highly detailed texture, 8k resolution, vogue editorial style",
     PresetCategory::Style),
    ("style-vintage", "Vintage 90s", "Nostalgic film color and grain, 90s style.",
     "90s fashion aesthetic, film grain, retro color grading, flash photography style, slightly desaturated, nostalgic mood, analog camera texture",
     PresetCategory::Style),
    ("style-cyberpunk", "Cyberpunk", "Neon, high tech, sharp and modern.",
     "futuristic fashion, neon accents, metallic textures, sharp focus, high tech urban vibe, glowing elements, chromatic aberration, cinematic sci-fi look",
     PresetCategory::Style),
    ("style-bohemian", "Bohemian", "Dreamy, free-spirited, warm tones.",
     "soft focus, dreamy atmosphere, warm earth tones, natural lighting, organic textures, romantic and free-spirited vibe, ethereal glow",
     PresetCategory::Style),
    ("style-streetwear", "Streetwear", "Energetic, bold colors, hypebeast.",
     "sharp digital photography, high saturation, wide angle lens, dynamic perspective, vibrant colors, trendy streetwear culture aesthetic, hypebeast style",
     PresetCategory::Style),
    ("bg-bedroom", "Bedroom", "Bed with silk sheets, private space.",
     "intimate luxury bedroom setting, messy bed with silk sheets, soft pillows, morning sunlight streaming in, cozy and private atmosphere, plush headboard, blurred background, boudoir context, soft textures",
     PresetCategory::Background),
    ("bg-bathroom", "Bathroom", "Bathtub, tiles, mirror, spa feeling.",
     "luxury modern bathroom, marble walls, ceramic bathtub, large mirror with condensation, soft steam, spa-like atmosphere, clean and bright, wet surfaces, towel rack in background",
     PresetCategory::Background),
    ("bg-office", "Office", "Modern desk, professional workplace.",
     "modern corporate office environment, glass walls, office desk with laptop, blurred coworkers in background, bright daylight, professional business setting, skyscrapers visible through window",
     PresetCategory::Background),
    ("bg-studio-inf", "White Studio", "Infinite white backdrop, professional.",
     "professional cyclorama studio background, pure white infinity curve, zero distractions, commercial product photography standard, sharp subject isolation",
     PresetCategory::Background),
    ("bg-luxury-home", "Luxury Penthouse", "High-end modern interior, large windows.",
     "modern luxury penthouse interior, blurred background, marble textures, expensive furniture, floor-to-ceiling windows, sophisticated atmosphere, depth of field",
     PresetCategory::Background),
    ("bg-urban-city", "City Street", "Busy, modern, energetic street.",
     "bustling city street background, blurred urban architecture, concrete textures, daylight, metropolitan vibe, fashion week street style context",
     PresetCategory::Background),
    ("bg-nature-garden", "Garden", "Green nature, flowers, dappled light.",
     "lush green garden, sunlight filtering through leaves (dappled light), blooming flowers, soft bokeh background, nature-centric and fresh atmosphere",
     PresetCategory::Background),
    ("bg-beach-sunset", "Beach Sunset", "Golden hour beach, romantic resort.",
     "golden hour at the beach, soft sand, ocean waves in background, warm horizon light, vacation resort atmosphere, airy and breezy, romantic mood",
     PresetCategory::Background),
    ("pose-hot", "Bold", "Glamour magazine, lingerie or swimwear.",
     "bold and provocative pose, maxim magazine style, boudoir photography, arching back, accentuating body curves, sultry and intense, lingerie model posture, glamour shot, high visual impact, confident body language",
     PresetCategory::Pose),
    ("pose-secret", "Hidden Face", "Face covered or turned away, mysterious.",
     "anonymous pose, face obscured by shadow or hair, hand covering part of face, or looking away completely, mysterious vibe, focus entirely on the outfit and body language, identity hidden, artistic concealment",
     PresetCategory::Pose),
    ("pose-sexy", "Sensual", "Alluring curves, high fashion.",
     "high fashion sensual pose, alluring body language, accentuating curves and silhouette, confident and intense gaze, glamour photography, elegant yet provocative, slightly arched back",
     PresetCategory::Pose),
    ("pose-confident", "Power Stance", "Commanding stance, hands on hips.",
     "full body shot, model standing confidently with legs shoulder-width apart, hands on hips or crossed, chin up, powerful and commanding presence, direct gaze",
     PresetCategory::Pose),
    ("pose-walking", "Walking", "Natural motion, flowing hair.",
     "captured in mid-stride walking towards camera, dynamic movement, hair flowing, clothes draping naturally in motion, candid street style look, energetic vibe",
     PresetCategory::Pose),
    ("pose-sitting", "Sitting", "Relaxed on a chair or sofa.",
     "sitting on a stool or chair, body leaning slightly forward, engaging with the camera, casual and approachable posture, hands resting naturally, relaxed mood",
     PresetCategory::Pose),
    ("pose-leaning", "Leaning", "Against a wall, relaxed and cool.",
     "model leaning casually against a wall or surface, one leg slightly bent, relaxed shoulders, cool and nonchalant attitude, fashion editorial pose",
     PresetCategory::Pose),
    ("pose-back", "Over the Shoulder", "Turned away, looking back, shows the garment back.",
     "model turned away from camera looking back over the shoulder, highlighting the back design of the garment, artistic and mysterious angle, elegant neck line",
     PresetCategory::Pose),
    ("light-natural", "Natural", "Clear daylight, no lamps.",
     "pure natural lighting, sunlight, organic shadows, unlit environment, airy and bright, window light source, daytime atmosphere, authentic look",
     PresetCategory::Lighting),
    ("light-night", "Night", "Street lamps, night flash, moody.",
     "night time photography, low light, flash photography style, bokeh from city lights in background, high ISO grain, moody and atmospheric, dark environment",
     PresetCategory::Lighting),
    ("light-rembrandt", "Rembrandt", "Triangle of light on the cheek, classic depth.",
     "Rembrandt lighting style, artistic chiaroscuro, distinctive triangle of light on the cheek, dramatic side lighting, painterly quality, deep shadows and rich highlights",
     PresetCategory::Lighting),
    ("light-softbox", "Soft Studio", "Even, smooth, flattering light.",
     "large softbox lighting, diffuse and even illumination, wrapping around the subject, minimal shadows, very flattering for skin and fabric, commercial look",
     PresetCategory::Lighting),
    ("light-golden", "Golden Hour", "Warm late sun, artistic backlight.",
     "warm natural sunlight from the side, lens flare, golden orange tones, rim lighting highlighting the hair and silhouette, magical and cinematic atmosphere",
     PresetCategory::Lighting),
    ("light-dramatic", "Dramatic", "High contrast, strong shadows.",
     "high contrast lighting, chiaroscuro effect, deep shadows and bright highlights, cinematic drama, moody and intense, artistic portrait style",
     PresetCategory::Lighting),
    ("light-neon", "Neon Gel", "Blue/pink light, modern nightlife.",
     "colored gel lighting, dual tone lighting (blue and pink/red), vibrant nightlife atmosphere, artistic and edgy shadows, cyberpunk aesthetic",
     PresetCategory::Lighting),
    ("light-window", "Window", "Light through a window, soft shadows.",
     "soft natural light streaming through a window, directional but soft shadows, indoor setting, cozy and intimate atmosphere, realistic lighting",
     PresetCategory::Lighting),
    ("angle-profile", "Profile", "Side view, flatters facial lines.",
     "side profile shot, silhouette focus, highlighting the nose and jawline, artistic contour, looking sideways, distinct facial profile",
     PresetCategory::Angle),
    ("angle-dutch", "Dutch Tilt", "Tilted frame, dynamic.",
     "Dutch angle shot, tilted camera horizon, dynamic and energetic composition, creating a sense of movement and unease, artistic perspective",
     PresetCategory::Angle),
    ("angle-overhead", "Overhead", "Straight down from above.",
     "direct overhead shot, bird's eye view looking straight down, geometric composition, unique perspective on the outfit layout",
     PresetCategory::Angle),
    ("angle-low", "Low Angle", "Taller, more powerful silhouette.",
     "low angle shot, shot from below looking up at the model, hero shot perspective, elongating the legs, making the model look powerful and tall, dramatic perspective",
     PresetCategory::Angle),
    ("angle-eye", "Eye Level", "Natural, straight-on view.",
     "shot at eye level, straight-on angle, neutral perspective, realistic proportions, direct engagement with the viewer, standard fashion portrait",
     PresetCategory::Angle),
    ("angle-high", "High Angle", "From above, larger eyes.",
     "high angle shot, shot from above looking down, emphasizing the face and eyes, artistic composition, slimming effect on the body, editorial vibe",
     PresetCategory::Angle),
    ("angle-closeup", "Close Up", "Details and makeup.",
     "close-up shot, tight framing on the face and shoulders, macro details of fabric and makeup, sharp focus on eyes, bokeh background, intimacy",
     PresetCategory::Angle),
    ("angle-wide", "Wide Shot", "Full body and surroundings.",
     "wide angle shot, full body visible with significant environmental context, scenic background, sense of scale, dynamic composition",
     PresetCategory::Angle),
    ("exp-pout", "Pouty", "Cute or sultry pout.",
     "pouty lips, sultry and moody expression, slightly protruding lips, trendy instagram model look, soft gaze",
     PresetCategory::Expression),
    ("exp-wink", "Winking", "Playful and flirty.",
     "winking one eye, playful and flirty expression, cheeky smile, energetic and fun vibe, capturing a spontaneous moment",
     PresetCategory::Expression),
    ("exp-surprised", "Surprised", "Wide eyes, open mouth.",
     "surprised expression, wide eyes, slightly open mouth, dynamic reaction, shocked but beautiful, dramatic emotional display",
     PresetCategory::Expression),
    ("exp-cool", "Cool/Chic", "Model attitude, no emotion.",
     "expressionless face, cold and aloof gaze, poker face, high fashion model attitude, chic and sophisticated, slightly parted lips, intense staring",
     PresetCategory::Expression),
    ("exp-happy", "Joyful", "Big smile, positive energy.",
     "big genuine smile, laughing, joyful expression, sparkling eyes, approachable and friendly, positive energy, commercial lifestyle vibe",
     PresetCategory::Expression),
    ("exp-seductive", "Seductive", "Captivating gaze, lips slightly parted.",
     "seductive expression, smizing (smiling with eyes), bedroom eyes, slightly open mouth, alluring and mysterious look, soft facial tension",
     PresetCategory::Expression),
    ("exp-fierce", "Fierce", "Strong, determined, sharp gaze.",
     "fierce expression, intense focus, furrowed brows, strong jawline, confident and dominating look, warrior-like intensity",
     PresetCategory::Expression),
    ("exp-dreamy", "Dreamy", "Soft, gazing into the distance.",
     "dreamy expression, soft gaze looking away from camera, relaxed facial muscles, ethereal and romantic mood, peaceful and calm",
     PresetCategory::Expression),
];

/// The catalog a fresh install starts with.
pub fn default_presets() -> Vec<PresetOption> {
    BUILT_IN
        .iter()
        .map(|(id, label, description, prompt_detail, category)| PresetOption {
            id: id.to_string(),
            label: label.to_string(),
            description: Some(description.to_string()),
            prompt_detail: prompt_detail.to_string(),
            category: *category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn built_in_ids_are_unique() {
        let presets = default_presets();
        let ids: HashSet<_> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn every_category_is_populated() {
        let presets = default_presets();
        for category in PresetCategory::ALL {
            assert_eq!(presets.iter().filter(|p| p.category == category).count(), 8);
        }
    }

    #[test]
    fn stored_json_uses_prompt_detail() {
        let json = r#"{"id":"x","label":"X","promptDetail":"neon","category":"lighting"}"#;
        let preset: PresetOption = serde_json::from_str(json).unwrap();
        assert_eq!(preset.prompt_detail, "neon");
        assert_eq!(preset.category, PresetCategory::Lighting);
        assert!(preset.description.is_none());
    }
}
