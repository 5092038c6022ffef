/// Identity and wardrobe preservation demanded by strict mode.
pub const STRICT_IDENTITY_CLAUSE: &str = "IMPORTANT - HIGH FIDELITY CONSTRAINT: You must PRESERVE the EXACT facial identity, facial structure, head shape, body proportions, and skin details of the person in the reference image. \
Do NOT alter the face, eyes, nose, mouth, or jawline. The person in the output MUST look 100% identical to the reference. \
CRITICAL: You must ALSO PRESERVE the ORIGINAL CLOTHING, OUTFIT, and ACCESSORIES (jewelry, hats, glasses, etc.) EXACTLY as they appear in the reference image. \
Do NOT change the color, texture, or style of the clothes unless the prompt explicitly asks to change the clothing (e.g., \"wearing a red dress\", \"virtual try-on\", \"change outfit\"). \
If the user prompt does not strictly request a clothing change, do NOT modify the outfit or accessories in any way. \
Do NOT hallucinate new features. Keep the subject's appearance frozen unless directed otherwise.";

/// Strict slot of the extract template; the garment is the subject there.
pub const GARMENT_FIDELITY_CLAUSE: &str =
    "Maintain the exact shape, fabric details, and color of the original garment.";

pub const PRESET_CLAUSE_LEAD: &str = "Style and Atmosphere details to apply:";

/// The per-call pieces a mode template slots into its sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    pub strict: bool,
    pub preset: String,
    pub format: String,
    pub user_text: String,
}

impl Clauses {
    pub fn new(
        strict: bool,
        preset_fragments: &[String],
        aspect_ratio_directive: &str,
        resolution_directive: &str,
        user_text: &str,
    ) -> Self {
        Self {
            strict,
            preset: preset_clause(preset_fragments),
            format: format_clause(aspect_ratio_directive, resolution_directive),
            user_text: user_text.trim().to_string(),
        }
    }

    pub fn identity(&self) -> &'static str {
        if self.strict {
            STRICT_IDENTITY_CLAUSE
        } else {
            ""
        }
    }

    pub fn garment_fidelity(&self) -> &'static str {
        if self.strict {
            GARMENT_FIDELITY_CLAUSE
        } else {
            ""
        }
    }
}

/// Empty when no fragment carries text.
pub fn preset_clause(fragments: &[String]) -> String {
    let fragments: Vec<&str> = fragments
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if fragments.is_empty() {
        return String::new();
    }
    format!("{} {}.", PRESET_CLAUSE_LEAD, fragments.join(", "))
}

/// Blank directives drop out of the sentence; both blank drops the clause.
pub fn format_clause(aspect_ratio_directive: &str, resolution_directive: &str) -> String {
    let directives: Vec<&str> = [aspect_ratio_directive.trim(), resolution_directive.trim()]
        .into_iter()
        .filter(|d| !d.is_empty())
        .collect();
    if directives.is_empty() {
        return String::new();
    }
    format!(
        "Output Settings: Generate the image with {}.",
        directives.join(" and ")
    )
}

/// Closes `text` with a period unless it already ends a sentence.
pub fn terminate(text: &str) -> String {
    let text = text.trim();
    match text.chars().last() {
        None => String::new(),
        Some('.') | Some('!') | Some('?') => text.to_string(),
        Some(_) => format!("{}.", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_clause_joins_in_order() {
        let clause = preset_clause(&["neon accents".to_string(), "film grain".to_string()]);
        assert_eq!(
            clause,
            "Style and Atmosphere details to apply: neon accents, film grain."
        );
    }

    #[test]
    fn preset_clause_vanishes_when_empty() {
        assert_eq!(preset_clause(&[]), "");
        assert_eq!(preset_clause(&["  ".to_string()]), "");
    }

    #[test]
    fn format_clause_variants() {
        assert_eq!(
            format_clause("square 1:1", "4k"),
            "Output Settings: Generate the image with square 1:1 and 4k."
        );
        assert_eq!(
            format_clause("", "4k"),
            "Output Settings: Generate the image with 4k."
        );
        assert_eq!(format_clause(" ", ""), "");
    }

    #[test]
    fn terminate_adds_single_period() {
        assert_eq!(terminate("make it red"), "make it red.");
        assert_eq!(terminate("make it red!"), "make it red!");
        assert_eq!(terminate("  "), "");
    }

    #[test]
    fn strict_slots_follow_the_flag() {
        let relaxed = Clauses::new(false, &[], "", "", "");
        assert_eq!(relaxed.identity(), "");
        assert_eq!(relaxed.garment_fidelity(), "");

        let strict = Clauses::new(true, &[], "", "", "");
        assert_eq!(strict.identity(), STRICT_IDENTITY_CLAUSE);
        assert_eq!(strict.garment_fidelity(), GARMENT_FIDELITY_CLAUSE);
    }
}
