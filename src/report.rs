//! Reconciliation result reporting.
//!
//! A [`Report`] is the only output contract of the core: a `changed` flag
//! plus an ordered sequence of human-readable messages, surfaced verbatim to
//! the operator and serializable for automation runners that expect
//! changed/unchanged semantics.
use serde::Serialize;

/// Outcome of reconciling one or more packages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether any filesystem change was made.
    pub changed: bool,
    /// Ordered human-readable messages describing what happened.
    pub messages: Vec<String>,
}

impl Report {
    /// Create an empty, unchanged report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changed: false,
            messages: Vec::new(),
        }
    }

    /// Fold another report into this one.
    ///
    /// `changed` is the logical OR of both reports; messages are appended in
    /// order.
    pub fn merge(&mut self, other: Self) {
        self.changed |= other.changed;
        self.messages.extend(other.messages);
    }

    /// Serialize the report as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
