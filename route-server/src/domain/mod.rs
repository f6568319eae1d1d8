//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated transport-network data. All types enforce their invariants
//! at construction time, so code that receives these types can trust
//! their validity.

mod edge;
mod error;
mod location;
mod route;

pub use edge::{Edge, EdgeId, OperatingDays, TransportMode};
pub use error::DomainError;
pub use location::{InvalidLocationCode, Location, LocationCode, LocationId};
pub use route::Route;
