use super::clauses::{terminate, Clauses};
use crate::models::OperationMode;

/// Role instruction plus a sentence builder for one mode.
pub struct ModeTemplate {
    pub mode: OperationMode,
    pub role: &'static str,
    pub build: fn(&Clauses) -> String,
}

const EXTRACT: ModeTemplate = ModeTemplate {
    mode: OperationMode::Extract,
    role: "You are a professional fashion photographer and editor. Your task is to isolate clothing items from images.",
    build: build_extract,
};

const TRY_ON: ModeTemplate = ModeTemplate {
    mode: OperationMode::TryOn,
    role: "You are an expert AI fashion stylist and photo manipulator. You specialize in realistic virtual try-on.",
    build: build_try_on,
};

const EDIT: ModeTemplate = ModeTemplate {
    mode: OperationMode::Edit,
    role: "You are a professional photo editor using generative AI. You can modify backgrounds, poses, and details while preserving the subject identity.",
    build: build_edit,
};

const UPSCALE: ModeTemplate = ModeTemplate {
    mode: OperationMode::Upscale,
    role: "You are an expert in image restoration and super-resolution.",
    build: build_upscale,
};

static TEMPLATES: [ModeTemplate; 4] = [EXTRACT, TRY_ON, EDIT, UPSCALE];

pub fn template_for(mode: OperationMode) -> &'static ModeTemplate {
    match mode {
        OperationMode::Extract => &TEMPLATES[0],
        OperationMode::TryOn => &TEMPLATES[1],
        OperationMode::Edit => &TEMPLATES[2],
        OperationMode::Upscale => &TEMPLATES[3],
    }
}

/// Joins non-empty slots with single spaces.
fn join_slots(slots: &[&str]) -> String {
    slots
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// body, strict(garment), preset, format, user text
fn build_extract(c: &Clauses) -> String {
    join_slots(&[
        "Extract the main clothing item (garment) from the provided image. Display it as a high-quality flat-lay fashion design product shot on a pure white background. Ensure textures and details are preserved.",
        c.garment_fidelity(),
        c.preset.as_str(),
        c.format.as_str(),
        c.user_text.as_str(),
    ])
}

// intro, strict, drape, preset, format, user text
fn build_try_on(c: &Clauses) -> String {
    join_slots(&[
        "Create a photorealistic image. Take the person from the first image and dress them in the clothing shown in the second image.",
        c.identity(),
        "Maintain the fabric physics and drape naturally.",
        c.preset.as_str(),
        c.format.as_str(),
        c.user_text.as_str(),
    ])
}

// instruction, preset, strict, format, photorealism
fn build_edit(c: &Clauses) -> String {
    let instruction = if c.user_text.is_empty() {
        "Edit the provided image.".to_string()
    } else {
        format!(
            "Edit the provided image according to this instruction: {}",
            terminate(&c.user_text)
        )
    };
    join_slots(&[
        instruction.as_str(),
        c.preset.as_str(),
        c.identity(),
        c.format.as_str(),
        "Ensure high photorealism.",
    ])
}

// body, strict, preset, format
fn build_upscale(c: &Clauses) -> String {
    join_slots(&[
        "Redraw this image in extremely high resolution (4k), sharpening all details, improving textures, and correcting any artifacts. Do not change the content, just enhance the quality significantly.",
        c.identity(),
        c.preset.as_str(),
        c.format.as_str(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::clauses::{GARMENT_FIDELITY_CLAUSE, STRICT_IDENTITY_CLAUSE};

    fn clauses(strict: bool, user_text: &str) -> Clauses {
        Clauses::new(
            strict,
            &["neon accents".to_string()],
            "square 1:1",
            "4k",
            user_text,
        )
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' missing from '{}'", needle, haystack))
    }

    #[test]
    fn table_covers_every_mode() {
        for mode in OperationMode::ALL {
            assert_eq!(template_for(mode).mode, mode);
        }
    }

    #[test]
    fn extract_slot_order() {
        let c = clauses(true, "keep the logo");
        let text = (template_for(OperationMode::Extract).build)(&c);
        let body = position(&text, "pure white background");
        let strict = position(&text, GARMENT_FIDELITY_CLAUSE);
        let preset = position(&text, &c.preset);
        let format = position(&text, &c.format);
        let user = position(&text, "keep the logo");
        assert!(body < strict && strict < preset && preset < format && format < user);
        assert!(!text.contains(STRICT_IDENTITY_CLAUSE));
    }

    #[test]
    fn try_on_slot_order() {
        let c = clauses(true, "tuck the shirt in");
        let text = (template_for(OperationMode::TryOn).build)(&c);
        let intro = position(&text, "second image");
        let strict = position(&text, STRICT_IDENTITY_CLAUSE);
        let drape = position(&text, "drape naturally");
        let preset = position(&text, &c.preset);
        let user = position(&text, "tuck the shirt in");
        assert!(intro < strict && strict < drape && drape < preset && preset < user);
    }

    #[test]
    fn edit_places_strict_after_presets() {
        let c = clauses(true, "swap the background for a beach");
        let text = (template_for(OperationMode::Edit).build)(&c);
        assert!(text.starts_with(
            "Edit the provided image according to this instruction: swap the background for a beach."
        ));
        let preset = position(&text, &c.preset);
        let strict = position(&text, STRICT_IDENTITY_CLAUSE);
        let format = position(&text, &c.format);
        assert!(preset < strict && strict < format);
        assert!(text.ends_with("Ensure high photorealism."));
    }

    #[test]
    fn edit_without_presets_has_no_stray_periods() {
        let c = Clauses::new(false, &[], "square 1:1", "4k", "make it red");
        let text = (template_for(OperationMode::Edit).build)(&c);
        assert!(!text.contains(". ."));
        assert!(!text.contains(".."));
        assert!(!text.contains("  "));
    }

    #[test]
    fn upscale_ignores_user_text() {
        let c = clauses(false, "add a hat");
        let text = (template_for(OperationMode::Upscale).build)(&c);
        assert!(!text.contains("add a hat"));
        assert!(text.contains("Do not change the content"));
    }

    #[test]
    fn user_text_slot_matches_mode() {
        for mode in OperationMode::ALL {
            let text = (template_for(mode).build)(&clauses(false, "add a red scarf"));
            assert_eq!(text.contains("add a red scarf"), mode.uses_user_text(), "{}", mode);
        }
    }
}
