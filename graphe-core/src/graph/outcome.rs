//! Status values reported by link and vertex mutations.

/// Result of a mutation that succeeded or was a benign no-op.
///
/// The no-op variants leave the graph untouched; they are status values
/// rather than errors so callers can report them without unwinding.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MutationOutcome {
    /// The graph changed.
    Applied,
    /// The link was already present.
    DuplicateLink,
    /// The link to remove was not present.
    MissingLink,
    /// The vertex id is not the next free id.
    VertexExists,
}

impl MutationOutcome {
    /// Returns `true` when the graph changed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Short human-readable description used when reporting the outcome.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::DuplicateLink => "link already exists",
            Self::MissingLink => "link does not exist",
            Self::VertexExists => "vertex already exists",
        }
    }
}
