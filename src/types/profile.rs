//! User dietary profile and recipe constraint types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe difficulty tier. `Easy` is the default and the tier the
/// normalizer falls back to when the model omits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Prompt requirement text for this tier.
    pub(crate) fn requirement(&self) -> &'static str {
        match self {
            Difficulty::Easy => {
                "Very simple and easy to make, no advanced technique needed. \
                 Suitable for someone new to cooking; the steps must be very \
                 detailed and easy to follow."
            }
            Difficulty::Medium => {
                "Medium difficulty, needs some basic cooking skills. A few \
                 steps may be more involved but everything stays doable."
            }
            Difficulty::Hard => {
                "Higher difficulty; advanced techniques are fine. The dish \
                 may have many steps and reward care and experience."
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total-cooking-time bracket the recipe must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// 5–10 minutes.
    Quick,
    /// 20–30 minutes.
    #[default]
    Standard,
    /// Over an hour.
    Extended,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Quick => "5-10 minutes",
            TimeRange::Standard => "20-30 minutes",
            TimeRange::Extended => "over 1 hour",
        }
    }

    pub(crate) fn requirement(&self) -> &'static str {
        match self {
            TimeRange::Quick => {
                "Total time from prep to done must be 5-10 minutes. The dish \
                 must be very fast and simple, doable in a few minutes."
            }
            TimeRange::Standard => {
                "Total time from prep to done must be 20-30 minutes. A \
                 balanced dish, trading speed against quality."
            }
            TimeRange::Extended => {
                "Total time from prep to done may exceed one hour. The dish \
                 can be more elaborate and take longer to prepare."
            }
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget bracket for a shopping plan, in the user's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// Dietary preference attached to a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    /// No restriction.
    #[default]
    Default,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    Halal,
    Kosher,
    /// Weight-loss oriented.
    Diet,
    /// High-protein, training-support.
    Gym,
    /// Free-text regimen described by the user.
    Custom,
}

impl DietaryPreference {
    /// Description the prompt uses for the preset regimens. `Default` and
    /// `Custom` have no preset text.
    pub(crate) fn description(&self) -> Option<&'static str> {
        match self {
            DietaryPreference::Default | DietaryPreference::Custom => None,
            DietaryPreference::Vegetarian => {
                Some("vegetarian (no meat; vegetables plus dairy and eggs)")
            }
            DietaryPreference::Vegan => Some("vegan (no animal products at all)"),
            DietaryPreference::Keto => Some("keto (low carb, high fat)"),
            DietaryPreference::Paleo => Some("paleo (whole, unprocessed foods)"),
            DietaryPreference::Halal => Some("halal"),
            DietaryPreference::Kosher => Some("kosher"),
            DietaryPreference::Diet => {
                Some("weight-loss diet (low calorie, healthy, supports losing weight)")
            }
            DietaryPreference::Gym => Some(
                "training diet (high protein, supports muscle gain and post-workout recovery)",
            ),
        }
    }
}

/// The slice of a user profile the generation core cares about: regimen and
/// allergies. Fetched by the caller, read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub dietary_preference: DietaryPreference,
    /// Free-text regimen, used when `dietary_preference` is `Custom`.
    pub custom_dietary: Option<String>,
    /// Ingredients that must never appear in a result.
    pub allergies: Vec<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dietary(mut self, preference: DietaryPreference) -> Self {
        self.dietary_preference = preference;
        self
    }

    pub fn with_custom_dietary(mut self, description: impl Into<String>) -> Self {
        self.dietary_preference = DietaryPreference::Custom;
        self.custom_dietary = Some(description.into());
        self
    }

    pub fn with_allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }
}
