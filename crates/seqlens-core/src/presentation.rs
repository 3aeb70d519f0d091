//! Diagram presentation types.
//!
//! A presentation is the visual placement of a model element on the diagram
//! plane. Node presentations occupy a bounding rectangle; link presentations
//! are routed through an ordered sequence of points and carry a display
//! label. The `element_type` tag names the presented model element kind
//! (for example `"Message"` or `"CombinedFragment"`), mirroring the type
//! strings used by the modeling tool's presentation store.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};

/// Element type tag for combined-fragment presentations.
pub const COMBINED_FRAGMENT_TYPE: &str = "CombinedFragment";

/// Element type tag for message presentations.
pub const MESSAGE_TYPE: &str = "Message";

/// The visual placement of one model element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Presentation {
    /// A rectangular placement of a node-like element.
    Node(NodePresentation),
    /// A routed placement of a link-like element.
    Link(LinkPresentation),
}

impl Presentation {
    /// Returns the presented element's type tag.
    pub fn element_type(&self) -> &str {
        match self {
            Presentation::Node(node) => node.element_type(),
            Presentation::Link(link) => link.element_type(),
        }
    }
}

/// A rectangular placement of a node-like element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePresentation {
    element_type: String,
    bounds: Bounds,
}

impl NodePresentation {
    /// Creates a node presentation with its element type tag and bounds.
    pub fn new(element_type: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            element_type: element_type.into(),
            bounds,
        }
    }

    /// Returns the presented element's type tag.
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Returns the bounding rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A routed placement of a link-like element, such as a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkPresentation {
    element_type: String,
    label: String,
    #[serde(default)]
    points: Vec<Point>,
}

impl LinkPresentation {
    /// Creates a link presentation with its type tag, display label, and
    /// routing points.
    pub fn new(
        element_type: impl Into<String>,
        label: impl Into<String>,
        points: Vec<Point>,
    ) -> Self {
        Self {
            element_type: element_type.into(),
            label: label.into(),
            points,
        }
    }

    /// Returns the presented element's type tag.
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrows the routing points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the link's two endpoints, the first and last routing points.
    ///
    /// Returns `None` when the link has fewer than two points. Such a
    /// presentation is malformed; callers skip it rather than erroring.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match (self.points.first(), self.points.last()) {
            (Some(&start), Some(&end)) if self.points.len() >= 2 => Some((start, end)),
            _ => {
                debug!(
                    label = self.label,
                    point_count = self.points.len();
                    "Link presentation has fewer than two points"
                );
                None
            }
        }
    }
}
