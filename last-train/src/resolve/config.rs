//! Resolution thresholds.

/// Error returned when thresholds are inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid resolver config: {reason}")]
pub struct InvalidResolverConfig {
    reason: &'static str,
}

/// Confidence bands and suggestion cap for station resolution.
///
/// Lower bounds are inclusive, so a score exactly on a threshold falls into
/// the higher-confidence band.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Scores at or above this resolve without asking.
    pub auto_accept: f64,

    /// Scores at or above this (and below `auto_accept`) ask the user to
    /// confirm the top candidate.
    pub confirm: f64,

    /// Maximum number of suggestions shown.
    pub max_suggestions: usize,
}

impl ResolverConfig {
    /// Create a config, checking that `0 <= confirm <= auto_accept <= 1`.
    pub fn new(
        auto_accept: f64,
        confirm: f64,
        max_suggestions: usize,
    ) -> Result<Self, InvalidResolverConfig> {
        if !(0.0..=1.0).contains(&auto_accept) || !(0.0..=1.0).contains(&confirm) {
            return Err(InvalidResolverConfig {
                reason: "thresholds must lie in [0, 1]",
            });
        }
        if confirm > auto_accept {
            return Err(InvalidResolverConfig {
                reason: "confirm threshold must not exceed auto-accept threshold",
            });
        }
        if max_suggestions == 0 {
            return Err(InvalidResolverConfig {
                reason: "at least one suggestion must be shown",
            });
        }

        Ok(Self {
            auto_accept,
            confirm,
            max_suggestions,
        })
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            auto_accept: 0.9,
            confirm: 0.7,
            max_suggestions: 5,
        }
    }
}
