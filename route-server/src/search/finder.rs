//! Orchestration: endpoint resolution plus the three strategies.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{LocationCode, Route};
use crate::store::{EdgeStore, LocationResolver, StoreError};

use super::{DirectStrategy, SearchStrategy, ThreeHopStrategy, TwoHopStrategy};

/// Which endpoint of a search failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from route search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An endpoint code does not resolve to a known location.
    /// Retrying cannot succeed without external state change.
    #[error("{endpoint} location not found with code: {code}")]
    UnknownLocation {
        endpoint: Endpoint,
        code: LocationCode,
    },

    /// Origin and destination resolve to the same location
    #[error("origin and destination cannot be the same location")]
    SameLocation,

    /// A store query failed; propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolves endpoints and aggregates all strategies' routes.
pub struct RouteFinder<'a, R, S> {
    resolver: &'a R,
    store: &'a S,
}

impl<'a, R: LocationResolver, S: EdgeStore> RouteFinder<'a, R, S> {
    pub fn new(resolver: &'a R, store: &'a S) -> Self {
        Self { resolver, store }
    }

    /// Find every valid route between two location codes, optionally
    /// restricted to edges operating on `date`.
    ///
    /// Output is the concatenation of the direct, two-hop, and
    /// three-hop results in that order; an empty list is a successful
    /// outcome, not an error.
    pub async fn find_routes(
        &self,
        origin_code: &LocationCode,
        destination_code: &LocationCode,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Route>, SearchError> {
        debug!(
            origin = %origin_code,
            destination = %destination_code,
            date = ?date,
            "finding valid routes"
        );

        let origin = self
            .resolver
            .resolve_by_code(origin_code)
            .await?
            .ok_or_else(|| SearchError::UnknownLocation {
                endpoint: Endpoint::Origin,
                code: origin_code.clone(),
            })?;

        let destination = self
            .resolver
            .resolve_by_code(destination_code)
            .await?
            .ok_or_else(|| SearchError::UnknownLocation {
                endpoint: Endpoint::Destination,
                code: destination_code.clone(),
            })?;

        // A route to oneself is meaningless; rejected before any edge query.
        if origin.id == destination.id {
            return Err(SearchError::SameLocation);
        }

        let direct = DirectStrategy::new(self.store);
        let two_hop = TwoHopStrategy::new(self.store);
        let three_hop = ThreeHopStrategy::new(self.store);

        // Strategies only read the store, so they run concurrently;
        // the merge order below keeps the output deterministic.
        let (direct_routes, two_hop_routes, three_hop_routes) = tokio::join!(
            direct.find_routes(&origin, &destination, date),
            two_hop.find_routes(&origin, &destination, date),
            three_hop.find_routes(&origin, &destination, date),
        );

        let mut routes = direct_routes?;
        routes.extend(two_hop_routes?);
        routes.extend(three_hop_routes?);

        info!(
            origin = %origin_code,
            destination = %destination_code,
            routes = routes.len(),
            "route search complete"
        );
        Ok(routes)
    }
}
