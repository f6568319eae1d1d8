//! Route value type: a contiguous chain of legs.

use std::sync::Arc;

use super::{DomainError, Edge, Location};

/// An ordered, contiguous chain of one to three legs connecting an
/// origin to a destination.
///
/// A `Route` is a value produced by the search; it has no persistent
/// identity. The constructor enforces leg count, endpoint match, and
/// chain contiguity by location id. It does not enforce the
/// one-flight structural rule; that belongs to the search layer,
/// which only assembles chains that already satisfy it.
#[derive(Debug, Clone)]
pub struct Route {
    origin: Arc<Location>,
    destination: Arc<Location>,
    legs: Vec<Arc<Edge>>,
}

impl Route {
    /// Assemble a route, validating the chain.
    pub fn new(
        origin: Arc<Location>,
        destination: Arc<Location>,
        legs: Vec<Arc<Edge>>,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() || legs.len() > 3 {
            return Err(DomainError::InvalidLegCount(legs.len()));
        }

        if legs[0].origin.id != origin.id {
            return Err(DomainError::OriginMismatch);
        }

        let last = legs.len() - 1;
        if legs[last].destination.id != destination.id {
            return Err(DomainError::DestinationMismatch);
        }

        for i in 0..last {
            if legs[i].destination.id != legs[i + 1].origin.id {
                return Err(DomainError::BrokenChain(i, i + 1));
            }
        }

        Ok(Self {
            origin,
            destination,
            legs,
        })
    }

    pub fn origin(&self) -> &Arc<Location> {
        &self.origin
    }

    pub fn destination(&self) -> &Arc<Location> {
        &self.destination
    }

    pub fn legs(&self) -> &[Arc<Edge>] {
        &self.legs
    }

    /// Number of legs in the chain.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EdgeId, LocationCode, LocationId, OperatingDays, TransportMode};

    fn loc(id: u64, code: &str) -> Arc<Location> {
        Arc::new(Location::new(
            LocationId(id),
            code,
            "Turkey",
            "Istanbul",
            LocationCode::parse(code).unwrap(),
        ))
    }

    fn edge(id: u64, origin: &Arc<Location>, destination: &Arc<Location>) -> Arc<Edge> {
        Arc::new(Edge::new(
            EdgeId(id),
            origin.clone(),
            destination.clone(),
            TransportMode::Flight,
            OperatingDays::unrestricted(),
        ))
    }

    #[test]
    fn single_leg_route() {
        let ist = loc(1, "IST");
        let esb = loc(2, "ESB");
        let route = Route::new(ist.clone(), esb.clone(), vec![edge(10, &ist, &esb)]).unwrap();
        assert_eq!(route.leg_count(), 1);
        assert_eq!(route.origin().id, ist.id);
        assert_eq!(route.destination().id, esb.id);
    }

    #[test]
    fn contiguous_three_leg_route() {
        let a = loc(1, "AAA");
        let b = loc(2, "BBB");
        let c = loc(3, "CCC");
        let d = loc(4, "DDD");
        let legs = vec![edge(10, &a, &b), edge(11, &b, &c), edge(12, &c, &d)];
        let route = Route::new(a, d, legs).unwrap();
        assert_eq!(route.leg_count(), 3);
    }

    #[test]
    fn empty_chain_rejected() {
        let a = loc(1, "AAA");
        let b = loc(2, "BBB");
        assert_eq!(
            Route::new(a, b, vec![]).unwrap_err(),
            DomainError::InvalidLegCount(0)
        );
    }

    #[test]
    fn four_legs_rejected() {
        let a = loc(1, "AAA");
        let b = loc(2, "BBB");
        let legs = vec![
            edge(10, &a, &b),
            edge(11, &b, &a),
            edge(12, &a, &b),
            edge(13, &b, &a),
        ];
        assert_eq!(
            Route::new(a.clone(), a, legs).unwrap_err(),
            DomainError::InvalidLegCount(4)
        );
    }

    #[test]
    fn broken_chain_rejected() {
        let a = loc(1, "AAA");
        let b = loc(2, "BBB");
        let c = loc(3, "CCC");
        let d = loc(4, "DDD");
        // Second leg starts at C, not at B where the first leg ends.
        let legs = vec![edge(10, &a, &b), edge(11, &c, &d)];
        assert_eq!(
            Route::new(a, d, legs).unwrap_err(),
            DomainError::BrokenChain(0, 1)
        );
    }

    #[test]
    fn endpoint_mismatch_rejected() {
        let a = loc(1, "AAA");
        let b = loc(2, "BBB");
        let c = loc(3, "CCC");
        assert_eq!(
            Route::new(c.clone(), b.clone(), vec![edge(10, &a, &b)]).unwrap_err(),
            DomainError::OriginMismatch
        );
        assert_eq!(
            Route::new(a.clone(), c, vec![edge(10, &a, &b)]).unwrap_err(),
            DomainError::DestinationMismatch
        );
    }
}
