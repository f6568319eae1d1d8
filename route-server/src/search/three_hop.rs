//! 3-leg strategy: surface, flight, surface, joined through hubs.
//!
//! Rather than a brute-force triple cross-product, the search narrows
//! to hubs first: destinations of surface legs out of the origin on
//! one side, origins of surface legs into the destination on the
//! other. Only flights between those two hub sets can form a valid
//! middle leg, and that flight set is typically much smaller than the
//! whole network.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Edge, EdgeId, Location, LocationId, Route, TransportMode};
use crate::store::EdgeStore;

use super::validity::is_valid_chain;
use super::{SearchError, SearchStrategy};

/// Finds three-leg routes via hub narrowing.
pub struct ThreeHopStrategy<'a, S: EdgeStore> {
    store: &'a S,
}

impl<'a, S: EdgeStore> ThreeHopStrategy<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: EdgeStore> SearchStrategy for ThreeHopStrategy<'_, S> {
    fn max_legs(&self) -> usize {
        3
    }

    async fn find_routes(
        &self,
        origin: &Arc<Location>,
        destination: &Arc<Location>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Route>, SearchError> {
        let before_legs: Vec<Arc<Edge>> = self
            .store
            .edges_from_excluding(origin.id, TransportMode::Flight)
            .await?
            .into_iter()
            .filter(|e| e.operates_on(date))
            .collect();

        let origin_hubs: HashSet<LocationId> =
            before_legs.iter().map(|e| e.destination.id).collect();
        if origin_hubs.is_empty() {
            return Ok(Vec::new());
        }

        let after_legs: Vec<Arc<Edge>> = self
            .store
            .edges_to_excluding(destination.id, TransportMode::Flight)
            .await?
            .into_iter()
            .filter(|e| e.operates_on(date))
            .collect();

        let destination_hubs: HashSet<LocationId> =
            after_legs.iter().map(|e| e.origin.id).collect();
        if destination_hubs.is_empty() {
            return Ok(Vec::new());
        }

        let flights: Vec<Arc<Edge>> = self
            .store
            .edges_by_mode_between_sets(TransportMode::Flight, &origin_hubs, &destination_hubs)
            .await?
            .into_iter()
            .filter(|e| e.operates_on(date))
            .collect();

        // Group connectors by hub so the join below is a lookup, not a scan.
        let mut before_by_hub: HashMap<LocationId, Vec<Arc<Edge>>> = HashMap::new();
        for leg in &before_legs {
            before_by_hub
                .entry(leg.destination.id)
                .or_default()
                .push(leg.clone());
        }
        let mut after_by_hub: HashMap<LocationId, Vec<Arc<Edge>>> = HashMap::new();
        for leg in &after_legs {
            after_by_hub
                .entry(leg.origin.id)
                .or_default()
                .push(leg.clone());
        }

        let mut routes = Vec::new();
        let mut seen: HashSet<(EdgeId, EdgeId, EdgeId)> = HashSet::new();

        for flight in &flights {
            let Some(before_candidates) = before_by_hub.get(&flight.origin.id) else {
                continue;
            };
            let Some(after_candidates) = after_by_hub.get(&flight.destination.id) else {
                continue;
            };

            for before in before_candidates {
                for after in after_candidates {
                    let legs = vec![before.clone(), flight.clone(), after.clone()];
                    if !is_valid_chain(&legs) {
                        continue;
                    }

                    // The same physical leg triple can be reachable
                    // through more than one query path; emit it once.
                    if !seen.insert((before.id, flight.id, after.id)) {
                        continue;
                    }

                    let Ok(route) = Route::new(origin.clone(), destination.clone(), legs) else {
                        continue;
                    };
                    routes.push(route);
                }
            }
        }

        // Deterministic output order, independent of store iteration order.
        routes.sort_by_key(leg_id_signature);

        debug!(
            origin = %origin.code,
            destination = %destination.code,
            flights = flights.len(),
            routes = routes.len(),
            "three-hop search complete"
        );
        Ok(routes)
    }
}

/// Comma-joined leg ids in chain order, the sort key for 3-leg output.
fn leg_id_signature(route: &Route) -> String {
    route
        .legs()
        .iter()
        .map(|leg| leg.id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
