//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Edge, Location, Route, TransportMode};

/// Query parameters for route search.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin location code
    pub origin: String,

    /// Destination location code
    pub destination: String,

    /// Optional ISO calendar date restricting legs to their
    /// operating days
    pub date: Option<NaiveDate>,
}

/// A location in responses.
#[derive(Debug, Serialize)]
pub struct LocationDto {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: String,
}

impl LocationDto {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.0,
            name: location.name.clone(),
            country: location.country.clone(),
            city: location.city.clone(),
            code: location.code.as_str().to_string(),
        }
    }
}

/// One leg of a route in responses.
#[derive(Debug, Serialize)]
pub struct LegDto {
    pub id: u64,
    pub mode: TransportMode,
    pub operating_days: Vec<u8>,
    pub origin: LocationDto,
    pub destination: LocationDto,
}

impl LegDto {
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            id: edge.id.0,
            mode: edge.mode,
            operating_days: edge.operating_days.as_slice().to_vec(),
            origin: LocationDto::from_location(&edge.origin),
            destination: LocationDto::from_location(&edge.destination),
        }
    }
}

/// A found route.
#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub origin: LocationDto,
    pub destination: LocationDto,
    pub legs: Vec<LegDto>,
    pub leg_count: usize,
}

impl RouteDto {
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: LocationDto::from_location(route.origin()),
            destination: LocationDto::from_location(route.destination()),
            legs: route.legs().iter().map(|l| LegDto::from_edge(l)).collect(),
            leg_count: route.leg_count(),
        }
    }
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteDto>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
