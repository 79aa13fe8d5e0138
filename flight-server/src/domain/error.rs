//! Domain error types.
//!
//! These errors represent values that cannot be represented in the packed
//! search layout. They are distinct from IO and parse errors.

/// Domain-level errors raised while building airports and routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Index does not fit the 16-bit packed layout
    #[error("airport index {0} out of range (at most 65534)")]
    IndexOutOfRange(u32),

    /// Airport records must be numbered 0, 1, 2, ... in order
    #[error("airport at position {position} has index {found}")]
    NonDenseIndex { position: usize, found: u32 },

    /// More airports than the packed layout can address
    #[error("too many airports: {0} (at most 65535)")]
    TooManyAirports(usize),
}
