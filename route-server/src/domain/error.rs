//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from store/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route must have between one and three legs
    #[error("invalid leg count: {0} (routes have 1 to 3 legs)")]
    InvalidLegCount(usize),

    /// Consecutive legs don't share a junction location
    #[error("broken chain: leg {0} does not end where leg {1} begins")]
    BrokenChain(usize, usize),

    /// First leg doesn't start at the route origin
    #[error("first leg does not start at the route origin")]
    OriginMismatch,

    /// Last leg doesn't end at the route destination
    #[error("last leg does not end at the route destination")]
    DestinationMismatch,
}
