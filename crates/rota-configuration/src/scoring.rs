use serde::Deserialize;
use serde::Serialize;

/// Bonus granted when a duty falls inside one of a member's preferred
/// slots. Negative, because lower scores win.
pub const DEFAULT_PREFERENCE_BONUS: f64 = -2.0;

/// Scoring defaults for the legacy fairness path. Callers can still
/// override the bonus per run through the assignment options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoringConfiguration {
    #[serde(default = "default_preference_bonus")]
    pub preference_bonus: f64,
}

impl Default for ScoringConfiguration {
    fn default() -> Self {
        Self {
            preference_bonus: DEFAULT_PREFERENCE_BONUS,
        }
    }
}

fn default_preference_bonus() -> f64 {
    DEFAULT_PREFERENCE_BONUS
}
