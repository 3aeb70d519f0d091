//! Seqlens - a structure inspector for UML sequence-diagram snapshots.
//!
//! Loads a project snapshot, locates sequence diagrams by name, and renders
//! a deterministic textual report of each diagram's interaction structure
//! plus a geometric analysis of which messages fall inside a combined
//! fragment's bounding rectangle.

pub mod config;
pub mod containment;
pub mod project;
pub mod report;

mod error;

pub use seqlens_core::{geometry, model, presentation};

pub use error::SeqlensError;

use log::{debug, info};

use config::AppConfig;
use project::Project;

/// Facade for inspecting sequence diagrams in a project snapshot.
///
/// # Examples
///
/// ```rust,no_run
/// use seqlens::{Inspector, config::AppConfig, project::Project};
///
/// let project = Project::open("project.json")
///     .expect("Failed to open snapshot");
///
/// // With custom config
/// let inspector = Inspector::new(AppConfig::default());
/// let report = inspector.inspect(&project, "example")
///     .expect("Failed to inspect");
/// println!("{report}");
///
/// // Or use default config
/// let inspector = Inspector::default();
/// ```
#[derive(Default)]
pub struct Inspector {
    config: AppConfig,
}

impl Inspector {
    /// Create a new inspector with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including report settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Inspect every sequence diagram with the given name.
    ///
    /// For each matching diagram, the result contains the interaction's
    /// structural report followed by the combined-fragment containment
    /// section. Zero matches is a soft outcome: the result is an empty
    /// string and no error is raised.
    ///
    /// # Errors
    ///
    /// Returns [`SeqlensError::AmbiguousContainer`] when the configured
    /// strict containment policy finds more than one candidate container.
    pub fn inspect(&self, project: &Project, diagram_name: &str) -> Result<String, SeqlensError> {
        let diagrams = project.sequence_diagrams_named(diagram_name);
        info!(
            diagram_name = diagram_name,
            match_count = diagrams.len();
            "Inspecting sequence diagrams"
        );

        let policy = self.config.report().containment();
        let mut out = String::new();
        for diagram in diagrams {
            debug!(diagram_name = diagram.name(); "Describing interaction");
            out.push_str(&report::describe_interaction(diagram.interaction()));
            out.push_str(&report::describe_containment(
                diagram.presentations(),
                policy,
            )?);
        }

        Ok(out)
    }
}
