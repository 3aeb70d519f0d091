//! Project snapshot loading and element lookup.
//!
//! A project snapshot is a JSON file holding the named elements of one
//! modeling project. [`Project::open`] acquires the snapshot, lookups run
//! against the in-memory elements, and the handle is released when the
//! project is dropped (or explicitly via the idempotent [`Project::close`]).
//! Release happens on every exit path, including errors, because it is tied
//! to the value's lifetime.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use seqlens_core::{model::Interaction, presentation::Presentation};

use crate::SeqlensError;

/// A named element of the project catalog.
///
/// The catalog is a flat listing; lookups filter it by name and kind. Only
/// sequence diagrams carry structure the inspector understands, every other
/// element kind is represented by its name alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelElement {
    /// A sequence diagram with its interaction and presentations.
    SequenceDiagram(SequenceDiagram),
    /// Any other named element in the project.
    Other {
        /// The element's name.
        name: String,
    },
}

impl ModelElement {
    /// Returns the element's name.
    pub fn name(&self) -> &str {
        match self {
            ModelElement::SequenceDiagram(diagram) => diagram.name(),
            ModelElement::Other { name } => name,
        }
    }
}

/// A sequence diagram: its name, behavioral content, and visual placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceDiagram {
    name: String,
    #[serde(default)]
    interaction: Interaction,
    #[serde(default)]
    presentations: Vec<Presentation>,
}

impl SequenceDiagram {
    /// Creates a sequence diagram from its parts.
    pub fn new(
        name: impl Into<String>,
        interaction: Interaction,
        presentations: Vec<Presentation>,
    ) -> Self {
        Self {
            name: name.into(),
            interaction,
            presentations,
        }
    }

    /// Returns the diagram's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the diagram's interaction.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Borrows the diagram's presentations in store order.
    pub fn presentations(&self) -> &[Presentation] {
        &self.presentations
    }
}

/// Filters a catalog of elements with a predicate, preserving order.
///
/// This is the pure lookup primitive: it allocates nothing but the result
/// vector and never fails. Zero matches is an empty result, not an error.
pub fn find<'a, P>(elements: &'a [ModelElement], predicate: P) -> Vec<&'a ModelElement>
where
    P: Fn(&ModelElement) -> bool,
{
    elements.iter().filter(|element| predicate(element)).collect()
}

/// An open project snapshot.
///
/// Holds the deserialized element catalog for the duration of an inspection
/// pass. The snapshot file itself is read once during [`Project::open`]; no
/// file handle stays open afterwards.
#[derive(Debug)]
pub struct Project {
    path: PathBuf,
    elements: Vec<ModelElement>,
    released: bool,
}

impl Project {
    /// Opens a project snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeqlensError::Io`] when the file cannot be read and
    /// [`SeqlensError::Open`] when its content is not a valid snapshot.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SeqlensError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Opening project snapshot");

        let content = fs::read_to_string(path)?;
        let elements: Vec<ModelElement> = serde_json::from_str(&content)
            .map_err(|source| SeqlensError::new_open_error(path, source))?;

        debug!(element_count = elements.len(); "Project snapshot loaded");
        Ok(Self {
            path: path.to_path_buf(),
            elements,
            released: false,
        })
    }

    /// Creates a project directly from an element catalog.
    ///
    /// Useful for tests and embedders that already hold a snapshot in memory.
    pub fn from_elements(elements: Vec<ModelElement>) -> Self {
        Self {
            path: PathBuf::new(),
            elements,
            released: false,
        }
    }

    /// Borrows the element catalog in store order.
    pub fn elements(&self) -> &[ModelElement] {
        &self.elements
    }

    /// Returns all sequence diagrams with the given name, in catalog order.
    ///
    /// Zero matches is a soft outcome: the result is simply empty.
    pub fn sequence_diagrams_named(&self, name: &str) -> Vec<&SequenceDiagram> {
        find(&self.elements, |element| {
            matches!(element, ModelElement::SequenceDiagram(diagram) if diagram.name() == name)
        })
        .into_iter()
        .filter_map(|element| match element {
            ModelElement::SequenceDiagram(diagram) => Some(diagram),
            ModelElement::Other { .. } => None,
        })
        .collect()
    }

    /// Releases the snapshot's resources.
    ///
    /// Idempotent: closing an already-closed project does nothing. Dropping
    /// the project closes it implicitly.
    pub fn close(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.elements.clear();
        debug!(path = self.path.display().to_string(); "Project snapshot released");
    }
}

impl Drop for Project {
    fn drop(&mut self) {
        self.close();
    }
}
