//! Site configuration (`site.toml`).
//!
//! Every key is optional. The landing app embeds its `site.toml` at build
//! time and falls back to defaults when it does not parse.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scroll::{DEFAULT_LOOKAHEAD_PX, Navigator, ScrollBehavior, ScrollTracker};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Max tracing level: trace, debug, info, warn or error
    pub log_level: String,
    pub scroll: ScrollConfig,
    pub motion: MotionConfig,
    pub parallax: ParallaxConfig,
    pub links: LinksConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            scroll: ScrollConfig::default(),
            motion: MotionConfig::default(),
            parallax: ParallaxConfig::default(),
            links: LinksConfig::default(),
        }
    }
}

/// Active-section tracking and navigation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels added to the scroll offset before matching section ranges
    pub lookahead_px: f64,
    pub behavior: ScrollBehavior,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lookahead_px: DEFAULT_LOOKAHEAD_PX,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Reveal transition timing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub duration_s: f64,
    /// Extra delay per item in staggered lists
    pub stagger_s: f64,
    /// Slide distance for directional reveals
    pub distance_px: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration_s: 0.8,
            stagger_s: 0.1,
            distance_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Hero background offset at the bottom of the page
    pub max_offset_percent: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            max_offset_percent: 50.0,
        }
    }
}

/// Outbound links. Unset links render as inert buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_toml_str`] but never fails: problems are
    /// logged and the defaults are used instead.
    pub fn from_toml_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("falling back to default site config: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("scroll.lookahead_px", self.scroll.lookahead_px),
            ("motion.duration_s", self.motion.duration_s),
            ("motion.stagger_s", self.motion.stagger_s),
            ("motion.distance_px", self.motion.distance_px),
            ("parallax.max_offset_percent", self.parallax.max_offset_percent),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level `{}`", self.log_level),
            });
        }
        Ok(())
    }

    /// Configured max level, `INFO` if the string is somehow unparsable.
    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.scroll.lookahead_px)
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.scroll.behavior)
    }
}
