//! Read-only query surface over the transport graph.
//!
//! The search engine consumes two narrow traits: [`LocationResolver`]
//! for turning codes into location records and [`EdgeStore`] for edge
//! queries. [`memory::InMemoryNetwork`] implements both over indexed
//! in-memory data; a database-backed implementation would slot in at
//! the same seam.

mod memory;

use std::collections::HashSet;
use std::sync::Arc;

pub use memory::{EdgeRecord, InMemoryNetwork, LocationRecord};

use crate::domain::{Edge, Location, LocationCode, LocationId, TransportMode};

/// Error from the storage layer.
///
/// Query failures propagate through the search unchanged; they are
/// infrastructure errors, distinct from the search's own domain errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a network file
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// Network file is not valid JSON
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),

    /// Network data violates a structural invariant
    #[error("invalid network: {0}")]
    InvalidNetwork(String),
}

/// Resolves a location code to a location record.
pub trait LocationResolver {
    /// Look up a location by its code. `Ok(None)` means the code is
    /// unknown; `Err` is reserved for backend failures.
    async fn resolve_by_code(
        &self,
        code: &LocationCode,
    ) -> Result<Option<Arc<Location>>, StoreError>;
}

/// Edge queries needed by the route-search strategies.
///
/// All queries are read-only; implementations must not reorder results
/// between calls (strategy output ordering leans on stable store order).
pub trait EdgeStore {
    /// Edges from `origin` to `destination`, any mode.
    async fn edges_between(
        &self,
        origin: LocationId,
        destination: LocationId,
    ) -> Result<Vec<Arc<Edge>>, StoreError>;

    /// All edges departing `origin`.
    async fn edges_from(&self, origin: LocationId) -> Result<Vec<Arc<Edge>>, StoreError>;

    /// All edges arriving at `destination`.
    async fn edges_to(&self, destination: LocationId) -> Result<Vec<Arc<Edge>>, StoreError>;

    /// Edges departing `origin` whose mode is not `excluded`.
    async fn edges_from_excluding(
        &self,
        origin: LocationId,
        excluded: TransportMode,
    ) -> Result<Vec<Arc<Edge>>, StoreError>;

    /// Edges arriving at `destination` whose mode is not `excluded`.
    async fn edges_to_excluding(
        &self,
        destination: LocationId,
        excluded: TransportMode,
    ) -> Result<Vec<Arc<Edge>>, StoreError>;

    /// Edges of the given mode whose origin is in `origins` and whose
    /// destination is in `destinations`.
    async fn edges_by_mode_between_sets(
        &self,
        mode: TransportMode,
        origins: &HashSet<LocationId>,
        destinations: &HashSet<LocationId>,
    ) -> Result<Vec<Arc<Edge>>, StoreError>;
}
