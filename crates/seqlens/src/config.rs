//! Configuration types for seqlens inspection.
//!
//! All types implement [`serde::Deserialize`] so a configuration can be
//! loaded from an external source (the CLI loads TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ReportConfig`] - Controls report behavior such as container selection.
//! - [`ContainmentPolicy`] - How a combined-fragment container is chosen.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified report configuration.
    pub fn new(report: ReportConfig) -> Self {
        Self { report }
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Report behavior configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Container selection policy for the containment analysis.
    #[serde(default)]
    containment: ContainmentPolicy,
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`] with the specified containment policy.
    pub fn new(containment: ContainmentPolicy) -> Self {
        Self { containment }
    }

    /// Returns the [`ContainmentPolicy`] for the containment analysis.
    pub fn containment(&self) -> ContainmentPolicy {
        self.containment
    }
}

/// How the combined-fragment container is selected when a diagram has more
/// than one combined-fragment presentation.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `LastWins` - The last combined fragment in presentation order is the
///   container (default; matches the historical single-container scan).
/// - `Strict` - More than one candidate is an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentPolicy {
    /// Last combined fragment in presentation order wins (default)
    #[default]
    LastWins,
    /// Error when more than one combined fragment is present
    Strict,
}

impl FromStr for ContainmentPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last_wins" => Ok(Self::LastWins),
            "strict" => Ok(Self::Strict),
            _ => Err("Unsupported containment policy"),
        }
    }
}

impl From<ContainmentPolicy> for &'static str {
    fn from(val: ContainmentPolicy) -> Self {
        match val {
            ContainmentPolicy::LastWins => "last_wins",
            ContainmentPolicy::Strict => "strict",
        }
    }
}

impl Display for ContainmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
