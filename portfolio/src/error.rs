//! Error types for the portfolio crate.

use thiserror::Error;

/// A section name that does not match any [`SectionId`](crate::SectionId).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}` (expected one of: hero, about, skills, experience, projects, contact)")]
pub struct ParseSectionError(pub String);

/// Failure to load `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax error or a value of the wrong type.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Parsed fine but a value is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending key
        field: &'static str,
        /// Human readable explanation
        reason: String,
    },
}
