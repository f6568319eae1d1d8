//! 2-leg strategy: one surface connector plus the flight, either order.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Edge, Location, Route};
use crate::store::EdgeStore;

use super::validity::is_valid_chain;
use super::{SearchError, SearchStrategy};

/// Finds two-leg routes by joining edges out of the origin against
/// edges into the destination on their shared junction.
///
/// This is a cross-product over the two candidate lists; per-node
/// fan-out is small in practice, but this is the dominant cost if it
/// grows.
pub struct TwoHopStrategy<'a, S: EdgeStore> {
    store: &'a S,
}

impl<'a, S: EdgeStore> TwoHopStrategy<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: EdgeStore> SearchStrategy for TwoHopStrategy<'_, S> {
    fn max_legs(&self) -> usize {
        2
    }

    async fn find_routes(
        &self,
        origin: &Arc<Location>,
        destination: &Arc<Location>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Route>, SearchError> {
        let from_origin: Vec<Arc<Edge>> = self
            .store
            .edges_from(origin.id)
            .await?
            .into_iter()
            .filter(|e| e.operates_on(date))
            .collect();

        let to_destination: Vec<Arc<Edge>> = self
            .store
            .edges_to(destination.id)
            .await?
            .into_iter()
            .filter(|e| e.operates_on(date))
            .collect();

        let mut routes = Vec::new();
        for first in &from_origin {
            for second in &to_destination {
                if first.destination.id != second.origin.id {
                    continue;
                }

                let legs = vec![first.clone(), second.clone()];
                if !is_valid_chain(&legs) {
                    continue;
                }

                let Ok(route) = Route::new(origin.clone(), destination.clone(), legs) else {
                    continue;
                };
                routes.push(route);
            }
        }

        debug!(
            origin = %origin.code,
            destination = %destination.code,
            routes = routes.len(),
            "two-hop search complete"
        );
        Ok(routes)
    }
}
