pub mod clauses;
pub mod templates;
pub mod variation;

use crate::models::{GenerationRequest, OperationMode};

pub use clauses::{Clauses, GARMENT_FIDELITY_CLAUSE, STRICT_IDENTITY_CLAUSE};
pub use templates::{template_for, ModeTemplate};
pub use variation::{variation_marker, RandomVariation, SequentialVariation, VariationSource};

/// Role instruction and mode body for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub mode: OperationMode,
    pub role: String,
    pub body: String,
}

impl ComposedPrompt {
    /// Text sent to the provider, before the variation marker.
    pub fn text(&self) -> String {
        format!("{}\n\n{}", self.role, self.body)
    }

    /// Text sent to the provider including the variation marker.
    pub fn with_variation(&self, token: u32) -> String {
        format!("{}{}", self.text(), variation_marker(token))
    }
}

/// Builds the instruction for a request. Pure: same request, same prompt.
pub fn compose(request: &GenerationRequest) -> ComposedPrompt {
    let template = template_for(request.mode);
    let clauses = Clauses::new(
        request.strict,
        &request.preset_fragments,
        &request.aspect_ratio_directive,
        &request.resolution_directive,
        &request.user_text,
    );

    ComposedPrompt {
        mode: request.mode,
        role: template.role.to_string(),
        body: (template.build)(&clauses),
    }
}
