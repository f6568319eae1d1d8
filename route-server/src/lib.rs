//! Transport route-search server.
//!
//! A web service that answers: "which valid routes connect this origin
//! to this destination, optionally on a given day?" A valid route is a
//! chain of one to three legs containing exactly one flight.

pub mod domain;
pub mod search;
pub mod store;
pub mod web;
