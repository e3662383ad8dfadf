//! Prompt builders for the four generation flavors.
//!
//! Each builder turns a caller-facing request into a [`GenerationRequest`]:
//! the full prompt text (with the JSON reply contract pinned inline) plus
//! the schema tag the normalizer will hold the reply to.
//!
//! [`GenerationRequest`]: crate::types::GenerationRequest

pub mod photo;
pub mod recipe;
pub mod shopping;

use crate::types::UserProfile;
use std::fmt::Write as _;

/// Append the dietary-regimen requirement shared by the recipe and
/// shopping-list prompts. No-op for an unrestricted profile.
pub(crate) fn push_dietary_section(prompt: &mut String, profile: &UserProfile, index: u8) {
    if let Some(custom) = profile
        .custom_dietary
        .as_deref()
        .filter(|c| !c.is_empty())
    {
        let _ = write!(
            prompt,
            "\n{index}. CUSTOM dietary regimen: the result MUST strictly follow this \
             user-defined regimen: \"{custom}\". Analyze its constraints carefully and \
             comply with all of them."
        );
    } else if let Some(description) = profile.dietary_preference.description() {
        let _ = write!(
            prompt,
            "\n{index}. Dietary regimen: the result must suit this diet: {description}."
        );
    }
}

/// Append the allergy exclusion block. No-op when the profile lists none.
pub(crate) fn push_allergy_section(prompt: &mut String, profile: &UserProfile) {
    if !profile.allergies.is_empty() {
        let _ = write!(
            prompt,
            "\n\nIMPORTANT - ALLERGIES: never use the following ingredients, the user is \
             allergic to them: {}. If a dish usually needs one of them, substitute \
             something safe instead.",
            profile.allergies.join(", ")
        );
    }
}
