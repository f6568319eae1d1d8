//! The structural route-validity rule.

use std::sync::Arc;

use crate::domain::Edge;

/// Whether an ordered chain of legs forms a structurally valid route.
///
/// A valid route has one to three legs and exactly one flight among
/// them. With two legs the flight may come first or second; with three
/// legs the flight must be the middle leg, bracketed by surface
/// connectors on both sides.
pub fn is_valid_chain(legs: &[Arc<Edge>]) -> bool {
    if legs.is_empty() || legs.len() > 3 {
        return false;
    }

    let flight_count = legs.iter().filter(|leg| leg.mode.is_flight()).count();
    if flight_count != 1 {
        return false;
    }

    // Exactly one flight, so the first occurrence is the only one.
    let Some(flight_index) = legs.iter().position(|leg| leg.mode.is_flight()) else {
        return false;
    };

    match legs.len() {
        1 => true,
        2 => flight_index == 0 || flight_index == 1,
        3 => {
            if flight_index != 1 {
                return false;
            }
            // Already implied by the exactly-one count; spelled out to
            // state the shape: surface, flight, surface.
            !legs[0].mode.is_flight() && !legs[2].mode.is_flight()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::chain_of as chain;
    use super::*;
    use crate::domain::TransportMode;

    use TransportMode::{Bus, Flight, RideHail, Subway};

    #[test]
    fn empty_chain_invalid() {
        assert!(!is_valid_chain(&[]));
    }

    #[test]
    fn single_flight_valid() {
        assert!(is_valid_chain(&chain(&[Flight])));
    }

    #[test]
    fn single_surface_leg_invalid() {
        assert!(!is_valid_chain(&chain(&[Bus])));
        assert!(!is_valid_chain(&chain(&[Subway])));
        assert!(!is_valid_chain(&chain(&[RideHail])));
    }

    #[test]
    fn two_legs_flight_either_side() {
        assert!(is_valid_chain(&chain(&[Bus, Flight])));
        assert!(is_valid_chain(&chain(&[Flight, RideHail])));
    }

    #[test]
    fn two_legs_without_flight_invalid() {
        assert!(!is_valid_chain(&chain(&[Bus, Subway])));
    }

    #[test]
    fn two_flights_invalid() {
        assert!(!is_valid_chain(&chain(&[Flight, Flight])));
    }

    #[test]
    fn three_legs_flight_in_middle_valid() {
        assert!(is_valid_chain(&chain(&[Bus, Flight, RideHail])));
        assert!(is_valid_chain(&chain(&[Subway, Flight, Bus])));
    }

    #[test]
    fn three_legs_flight_at_either_end_invalid() {
        assert!(!is_valid_chain(&chain(&[Flight, Bus, Subway])));
        assert!(!is_valid_chain(&chain(&[Bus, Subway, Flight])));
    }

    #[test]
    fn three_legs_multiple_flights_invalid() {
        assert!(!is_valid_chain(&chain(&[Flight, Flight, Bus])));
        assert!(!is_valid_chain(&chain(&[Bus, Flight, Flight])));
        assert!(!is_valid_chain(&chain(&[Flight, Flight, Flight])));
    }

    #[test]
    fn four_legs_invalid_even_with_one_flight() {
        assert!(!is_valid_chain(&chain(&[Bus, Flight, Bus, Subway])));
    }
}
