//! Model snapshot types for a sequence diagram's interaction.
//!
//! These types are read-only views over a project snapshot: the inspector
//! never creates, mutates, or deletes them. Ordering within every collection
//! is diagram authoring order and is significant; reports must preserve it.
//!
//! The key abstractions are:
//!
//! - [`Interaction`]: the behavioral content of one sequence diagram
//! - [`Lifeline`]: one participant, with its base classifier and fragments
//! - [`Fragment`]: sum type over the fragment kinds occurring on a lifeline
//! - [`OperatorFlags`]: the nine independent combined-fragment operator flags

use serde::{Deserialize, Serialize};

/// The behavioral content of a sequence diagram.
///
/// Holds the ordered gates, lifelines, and messages of one diagram. This is
/// the root type consumed by the inspector's report rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    gates: Vec<Gate>,
    #[serde(default)]
    lifelines: Vec<Lifeline>,
    #[serde(default)]
    messages: Vec<Message>,
}

impl Interaction {
    /// Creates a new interaction from its ordered parts.
    pub fn new(gates: Vec<Gate>, lifelines: Vec<Lifeline>, messages: Vec<Message>) -> Self {
        Self {
            gates,
            lifelines,
            messages,
        }
    }

    /// Borrows the gates in authoring order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Borrows the lifelines in authoring order.
    pub fn lifelines(&self) -> &[Lifeline] {
        &self.lifelines
    }

    /// Borrows the messages in authoring order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// A named connection point on the interaction boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    name: String,
}

impl Gate {
    /// Creates a gate with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the gate's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One participant in an interaction.
///
/// A lifeline optionally references a base classifier and carries the
/// ordered fragments occurring on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lifeline {
    name: String,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    fragments: Vec<Fragment>,
}

impl Lifeline {
    /// Creates a lifeline with a name, optional base classifier, and fragments.
    pub fn new(name: impl Into<String>, base: Option<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            name: name.into(),
            base,
            fragments,
        }
    }

    /// Returns the lifeline's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base classifier's name, if the lifeline has one.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Borrows the fragments in authoring order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// A fragment occurring on a lifeline.
///
/// Matching on this enum is exhaustive by construction, so a future fragment
/// kind is a compile-time-visible gap rather than a silently ignored case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// A combined fragment with operator flags and guarded operands.
    Combined(CombinedFragment),
    /// A state invariant constraint on the lifeline.
    StateInvariant {
        /// Display name of the invariant.
        name: String,
    },
    /// Any other fragment kind, reported by name only.
    Other {
        /// Display name of the element.
        name: String,
    },
}

/// A structured region of an interaction, partitioned into guarded operands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedFragment {
    #[serde(default)]
    operators: OperatorFlags,
    #[serde(default)]
    operands: Vec<InteractionOperand>,
}

impl CombinedFragment {
    /// Creates a combined fragment from its operator flags and operands.
    pub fn new(operators: OperatorFlags, operands: Vec<InteractionOperand>) -> Self {
        Self {
            operators,
            operands,
        }
    }

    /// Returns the operator flags record.
    pub fn operators(&self) -> OperatorFlags {
        self.operators
    }

    /// Borrows the operands in authoring order.
    pub fn operands(&self) -> &[InteractionOperand] {
        &self.operands
    }
}

/// The nine combined-fragment operator flags.
///
/// The source model exposes these as independent boolean queries, and an
/// inconsistent model may answer true for more than one. They are kept as a
/// fixed record of named booleans rather than an enum so the inspector can
/// report every flag's value without assuming mutual exclusivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorFlags {
    pub alt: bool,
    pub assert: bool,
    pub r#break: bool,
    pub consider: bool,
    pub critical: bool,
    pub ignore: bool,
    pub r#loop: bool,
    pub neg: bool,
    pub opt: bool,
}

impl OperatorFlags {
    /// Returns all nine flags as `(kind, value)` pairs in reporting order.
    pub fn entries(self) -> [(&'static str, bool); 9] {
        [
            ("alt", self.alt),
            ("assert", self.assert),
            ("break", self.r#break),
            ("consider", self.consider),
            ("critical", self.critical),
            ("ignore", self.ignore),
            ("loop", self.r#loop),
            ("neg", self.neg),
            ("opt", self.opt),
        ]
    }
}

/// One guarded branch within a combined fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionOperand {
    #[serde(default)]
    guard: String,
}

impl InteractionOperand {
    /// Creates an operand with the given guard condition (may be empty).
    pub fn new(guard: impl Into<String>) -> Self {
        Self {
            guard: guard.into(),
        }
    }

    /// Returns the guard condition. An empty string is a valid guard.
    pub fn guard(&self) -> &str {
        &self.guard
    }
}

/// A message between two named endpoints (lifelines or gates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    name: String,
    source: String,
    target: String,
    #[serde(default)]
    guard: Option<String>,
}

impl Message {
    /// Creates a message with its name, endpoint names, and optional guard.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        guard: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
            guard,
        }
    }

    /// Returns the message's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source endpoint's name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the target endpoint's name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the guard condition, if any.
    pub fn guard(&self) -> Option<&str> {
        self.guard.as_deref()
    }
}
