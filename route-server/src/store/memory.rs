//! In-memory transport network with prebuilt query indexes.
//!
//! Loads a network description from JSON and serves the edge/location
//! queries the search engine needs. Index maps are built once at
//! construction; all queries are lookups plus a filter pass.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{
    Edge, EdgeId, Location, LocationCode, LocationId, OperatingDays, TransportMode,
};

use super::{EdgeStore, LocationResolver, StoreError};

/// A location as it appears in a network file.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

/// An edge as it appears in a network file, endpoints by code.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub id: u64,
    pub origin: LocationCode,
    pub destination: LocationCode,
    pub mode: TransportMode,
    #[serde(default)]
    pub operating_days: Vec<u8>,
}

/// Top-level network file layout.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    locations: Vec<LocationRecord>,
    edges: Vec<EdgeRecord>,
}

/// Indexed, immutable transport network.
pub struct InMemoryNetwork {
    by_code: HashMap<LocationCode, Arc<Location>>,
    edges: Vec<Arc<Edge>>,
    by_origin: HashMap<LocationId, Vec<Arc<Edge>>>,
    by_destination: HashMap<LocationId, Vec<Arc<Edge>>>,
}

impl InMemoryNetwork {
    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        let file: NetworkFile = serde_json::from_str(&json)?;
        Self::from_records(file.locations, file.edges)
    }

    /// Build a network from records, validating structural invariants:
    /// unique location ids and codes, unique edge ids, both edge
    /// endpoints resolvable, no self-loop edges.
    pub fn from_records(
        locations: Vec<LocationRecord>,
        edges: Vec<EdgeRecord>,
    ) -> Result<Self, StoreError> {
        let mut by_code: HashMap<LocationCode, Arc<Location>> = HashMap::new();
        let mut seen_ids: HashSet<LocationId> = HashSet::new();

        for record in locations {
            let id = LocationId(record.id);
            if !seen_ids.insert(id) {
                return Err(StoreError::InvalidNetwork(format!(
                    "duplicate location id: {id}"
                )));
            }
            let location = Arc::new(Location::new(
                id,
                record.name,
                record.country,
                record.city,
                record.code.clone(),
            ));
            if by_code.insert(record.code.clone(), location).is_some() {
                return Err(StoreError::InvalidNetwork(format!(
                    "duplicate location code: {}",
                    record.code
                )));
            }
        }

        let mut built: Vec<Arc<Edge>> = Vec::with_capacity(edges.len());
        let mut seen_edge_ids: HashSet<EdgeId> = HashSet::new();

        for record in edges {
            let id = EdgeId(record.id);
            if !seen_edge_ids.insert(id) {
                return Err(StoreError::InvalidNetwork(format!("duplicate edge id: {id}")));
            }
            let origin = by_code.get(&record.origin).cloned().ok_or_else(|| {
                StoreError::InvalidNetwork(format!(
                    "edge {id} references unknown origin code: {}",
                    record.origin
                ))
            })?;
            let destination = by_code.get(&record.destination).cloned().ok_or_else(|| {
                StoreError::InvalidNetwork(format!(
                    "edge {id} references unknown destination code: {}",
                    record.destination
                ))
            })?;
            if origin.id == destination.id {
                return Err(StoreError::InvalidNetwork(format!(
                    "edge {id} is a self-loop at {}",
                    record.origin
                )));
            }
            built.push(Arc::new(Edge::new(
                id,
                origin,
                destination,
                record.mode,
                OperatingDays::only(record.operating_days),
            )));
        }

        let mut by_origin: HashMap<LocationId, Vec<Arc<Edge>>> = HashMap::new();
        let mut by_destination: HashMap<LocationId, Vec<Arc<Edge>>> = HashMap::new();
        for edge in &built {
            by_origin
                .entry(edge.origin.id)
                .or_default()
                .push(edge.clone());
            by_destination
                .entry(edge.destination.id)
                .or_default()
                .push(edge.clone());
        }

        Ok(Self {
            by_code,
            edges: built,
            by_origin,
            by_destination,
        })
    }

    /// Number of locations in the network.
    pub fn location_count(&self) -> usize {
        self.by_code.len()
    }

    /// Number of edges in the network.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn from_origin(&self, origin: LocationId) -> &[Arc<Edge>] {
        self.by_origin.get(&origin).map(Vec::as_slice).unwrap_or(&[])
    }

    fn to_destination(&self, destination: LocationId) -> &[Arc<Edge>] {
        self.by_destination
            .get(&destination)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl LocationResolver for InMemoryNetwork {
    async fn resolve_by_code(
        &self,
        code: &LocationCode,
    ) -> Result<Option<Arc<Location>>, StoreError> {
        Ok(self.by_code.get(code).cloned())
    }
}

impl EdgeStore for InMemoryNetwork {
    async fn edges_between(
        &self,
        origin: LocationId,
        destination: LocationId,
    ) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self
            .from_origin(origin)
            .iter()
            .filter(|e| e.destination.id == destination)
            .cloned()
            .collect())
    }

    async fn edges_from(&self, origin: LocationId) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self.from_origin(origin).to_vec())
    }

    async fn edges_to(&self, destination: LocationId) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self.to_destination(destination).to_vec())
    }

    async fn edges_from_excluding(
        &self,
        origin: LocationId,
        excluded: TransportMode,
    ) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self
            .from_origin(origin)
            .iter()
            .filter(|e| e.mode != excluded)
            .cloned()
            .collect())
    }

    async fn edges_to_excluding(
        &self,
        destination: LocationId,
        excluded: TransportMode,
    ) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self
            .to_destination(destination)
            .iter()
            .filter(|e| e.mode != excluded)
            .cloned()
            .collect())
    }

    async fn edges_by_mode_between_sets(
        &self,
        mode: TransportMode,
        origins: &HashSet<LocationId>,
        destinations: &HashSet<LocationId>,
    ) -> Result<Vec<Arc<Edge>>, StoreError> {
        Ok(self
            .edges
            .iter()
            .filter(|e| {
                e.mode == mode
                    && origins.contains(&e.origin.id)
                    && destinations.contains(&e.destination.id)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn location(id: u64, c: &str) -> LocationRecord {
        LocationRecord {
            id,
            name: format!("{c} name"),
            country: "Turkey".to_string(),
            city: "Istanbul".to_string(),
            code: code(c),
        }
    }

    fn edge(id: u64, origin: &str, destination: &str, mode: TransportMode) -> EdgeRecord {
        EdgeRecord {
            id,
            origin: code(origin),
            destination: code(destination),
            mode,
            operating_days: vec![],
        }
    }

    fn sample_network() -> InMemoryNetwork {
        InMemoryNetwork::from_records(
            vec![location(1, "IST"), location(2, "ESB"), location(3, "SAW")],
            vec![
                edge(10, "IST", "ESB", TransportMode::Flight),
                edge(11, "IST", "SAW", TransportMode::Bus),
                edge(12, "SAW", "ESB", TransportMode::Flight),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn resolve_known_and_unknown_codes() {
        let network = sample_network();
        let ist = network.resolve_by_code(&code("IST")).await.unwrap();
        assert_eq!(ist.unwrap().id, LocationId(1));
        let missing = network.resolve_by_code(&code("XXX")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn edges_between_pair() {
        let network = sample_network();
        let found = network
            .edges_between(LocationId(1), LocationId(2))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, EdgeId(10));
    }

    #[tokio::test]
    async fn edges_from_and_to() {
        let network = sample_network();
        let from_ist = network.edges_from(LocationId(1)).await.unwrap();
        assert_eq!(from_ist.len(), 2);
        let to_esb = network.edges_to(LocationId(2)).await.unwrap();
        assert_eq!(to_esb.len(), 2);
        let from_esb = network.edges_from(LocationId(2)).await.unwrap();
        assert!(from_esb.is_empty());
    }

    #[tokio::test]
    async fn mode_exclusion_queries() {
        let network = sample_network();
        let surface = network
            .edges_from_excluding(LocationId(1), TransportMode::Flight)
            .await
            .unwrap();
        assert_eq!(surface.len(), 1);
        assert_eq!(surface[0].id, EdgeId(11));

        let inbound_surface = network
            .edges_to_excluding(LocationId(2), TransportMode::Flight)
            .await
            .unwrap();
        assert!(inbound_surface.is_empty());
    }

    #[tokio::test]
    async fn mode_between_sets_query() {
        let network = sample_network();
        let origins: HashSet<_> = [LocationId(1), LocationId(3)].into_iter().collect();
        let destinations: HashSet<_> = [LocationId(2)].into_iter().collect();
        let flights = network
            .edges_by_mode_between_sets(TransportMode::Flight, &origins, &destinations)
            .await
            .unwrap();
        let ids: Vec<_> = flights.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EdgeId(10), EdgeId(12)]);
    }

    #[test]
    fn duplicate_location_code_rejected() {
        let result = InMemoryNetwork::from_records(
            vec![location(1, "IST"), location(2, "IST")],
            vec![],
        );
        assert!(matches!(result, Err(StoreError::InvalidNetwork(_))));
    }

    #[test]
    fn duplicate_location_id_rejected() {
        let result = InMemoryNetwork::from_records(
            vec![location(1, "IST"), location(1, "ESB")],
            vec![],
        );
        assert!(matches!(result, Err(StoreError::InvalidNetwork(_))));
    }

    #[test]
    fn unknown_edge_endpoint_rejected() {
        let result = InMemoryNetwork::from_records(
            vec![location(1, "IST")],
            vec![edge(10, "IST", "XXX", TransportMode::Flight)],
        );
        assert!(matches!(result, Err(StoreError::InvalidNetwork(_))));
    }

    #[test]
    fn self_loop_edge_rejected() {
        let result = InMemoryNetwork::from_records(
            vec![location(1, "IST")],
            vec![edge(10, "IST", "IST", TransportMode::Bus)],
        );
        assert!(matches!(result, Err(StoreError::InvalidNetwork(_))));
    }

    #[test]
    fn duplicate_edge_id_rejected() {
        let result = InMemoryNetwork::from_records(
            vec![location(1, "IST"), location(2, "ESB")],
            vec![
                edge(10, "IST", "ESB", TransportMode::Flight),
                edge(10, "ESB", "IST", TransportMode::Flight),
            ],
        );
        assert!(matches!(result, Err(StoreError::InvalidNetwork(_))));
    }

    #[test]
    fn load_from_json_file() {
        let json = r#"{
            "locations": [
                {"id": 1, "name": "Istanbul Airport", "country": "Turkey", "city": "Istanbul", "code": "IST"},
                {"id": 2, "name": "Esenboga Airport", "country": "Turkey", "city": "Ankara", "code": "ESB"}
            ],
            "edges": [
                {"id": 10, "origin": "IST", "destination": "ESB", "mode": "FLIGHT", "operating_days": [1, 2, 3, 4, 5]}
            ]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let network = InMemoryNetwork::load(file.path()).unwrap();
        assert_eq!(network.location_count(), 2);
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = InMemoryNetwork::load("/nonexistent/network.json");
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn load_malformed_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let result = InMemoryNetwork::load(file.path());
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
