//! Route search engine.
//!
//! Answers: "which valid routes connect this origin to this
//! destination, optionally on a given day?" A valid route is a chain
//! of one to three legs containing exactly one flight, with any
//! surface connectors allowed only immediately before and after it.
//!
//! Three strategies share a common interface, one per leg count; the
//! [`RouteFinder`] resolves the endpoints, runs every strategy, and
//! concatenates their results in fixed order.

mod direct;
mod finder;
mod three_hop;
mod two_hop;
mod validity;


use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Location, Route};

pub use direct::DirectStrategy;
pub use finder::{Endpoint, RouteFinder, SearchError};
pub use three_hop::ThreeHopStrategy;
pub use two_hop::TwoHopStrategy;
pub use validity::is_valid_chain;

/// A per-leg-count search strategy.
///
/// Strategies are independent of each other: each one depends only on
/// store queries and the two resolved endpoints, so the finder is free
/// to run them concurrently.
pub trait SearchStrategy {
    /// Number of legs in the routes this strategy produces.
    fn max_legs(&self) -> usize;

    /// Find all valid routes with exactly `max_legs` legs.
    async fn find_routes(
        &self,
        origin: &Arc<Location>,
        destination: &Arc<Location>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Route>, SearchError>;
}
