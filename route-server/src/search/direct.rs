//! 1-leg strategy: a direct flight between the endpoints.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Location, Route};
use crate::store::EdgeStore;

use super::{SearchError, SearchStrategy};

/// Finds single-leg routes.
///
/// A direct route is by definition a single flight; a lone surface leg
/// between the endpoints does not count as a route.
pub struct DirectStrategy<'a, S: EdgeStore> {
    store: &'a S,
}

impl<'a, S: EdgeStore> DirectStrategy<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: EdgeStore> SearchStrategy for DirectStrategy<'_, S> {
    fn max_legs(&self) -> usize {
        1
    }

    async fn find_routes(
        &self,
        origin: &Arc<Location>,
        destination: &Arc<Location>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Route>, SearchError> {
        let edges = self.store.edges_between(origin.id, destination.id).await?;

        let mut routes = Vec::new();
        for edge in edges {
            if !edge.operates_on(date) {
                continue;
            }
            if !edge.mode.is_flight() {
                continue;
            }
            // Parallel flights between the same pair are distinct
            // services; each becomes its own route.
            let Ok(route) = Route::new(origin.clone(), destination.clone(), vec![edge]) else {
                continue;
            };
            routes.push(route);
        }

        debug!(
            origin = %origin.code,
            destination = %destination.code,
            routes = routes.len(),
            "direct search complete"
        );
        Ok(routes)
    }
}
