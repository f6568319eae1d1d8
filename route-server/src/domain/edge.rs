//! Transportation edges: typed, directed, optionally day-restricted.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Location;

/// Opaque identity of an edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of transportation kinds.
///
/// `Flight` is the single long-haul kind; every other variant is a
/// surface connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Flight,
    Bus,
    Subway,
    RideHail,
}

impl TransportMode {
    /// Whether this is the long-haul (flight) kind.
    pub fn is_flight(self) -> bool {
        self == TransportMode::Flight
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportMode::Flight => "FLIGHT",
            TransportMode::Bus => "BUS",
            TransportMode::Subway => "SUBWAY",
            TransportMode::RideHail => "RIDE_HAIL",
        };
        f.write_str(s)
    }
}

/// The set of ISO weekday numbers (Monday=1 .. Sunday=7) an edge runs on.
///
/// An empty set means the edge runs every day. Values outside `[1, 7]`
/// are kept as loaded but can never match a real weekday, so they are
/// harmless rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatingDays(Vec<u8>);

impl OperatingDays {
    /// No restriction: runs every day.
    pub fn unrestricted() -> Self {
        OperatingDays(Vec::new())
    }

    /// Restriction to the given ISO weekday numbers.
    pub fn only(days: impl Into<Vec<u8>>) -> Self {
        OperatingDays(days.into())
    }

    /// Whether there is no day restriction.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// The operating-day predicate.
    ///
    /// Returns true when no date is supplied or no restriction exists;
    /// otherwise true iff the date's ISO weekday number is a member.
    /// Total for all inputs.
    pub fn allows(&self, date: Option<NaiveDate>) -> bool {
        let Some(date) = date else {
            return true;
        };
        if self.0.is_empty() {
            return true;
        }
        let weekday = date.weekday().number_from_monday() as u8;
        self.0.contains(&weekday)
    }

    /// The raw day numbers as loaded.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// One directed transportation service between two locations.
///
/// Direction is significant: an edge A→B does not imply B→A.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub origin: Arc<Location>,
    pub destination: Arc<Location>,
    pub mode: TransportMode,
    pub operating_days: OperatingDays,
}

impl Edge {
    /// Create a new edge.
    pub fn new(
        id: EdgeId,
        origin: Arc<Location>,
        destination: Arc<Location>,
        mode: TransportMode,
        operating_days: OperatingDays,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            mode,
            operating_days,
        }
    }

    /// Whether this edge runs on the given date (if any).
    ///
    /// Delegates to [`OperatingDays::allows`].
    pub fn operates_on(&self, date: Option<NaiveDate>) -> bool {
        self.operating_days.allows(date)
    }
}
