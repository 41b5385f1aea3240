//! Hub model: a named node in the network and its connection list

use serde::{Deserialize, Serialize};

use super::{HubError, HubResult};

/// A persisted hub record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    /// Unique, immutable identifier
    #[serde(rename = "hubId")]
    pub hub_id: String,
    /// Display label
    pub name: String,
    /// Ids of connected hubs, in the order the connections were made
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Hub {
    /// Create a hub with no connections
    pub fn new(hub_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hub_id: hub_id.into(),
            name: name.into(),
            connections: Vec::new(),
        }
    }

    /// Builder-style connection, used mostly by tests and fixtures
    pub fn with_connection(mut self, other: impl Into<String>) -> Self {
        self.connect_to(&other.into());
        self
    }

    pub fn is_connected_to(&self, other: &str) -> bool {
        self.connections.iter().any(|c| c == other)
    }

    /// Append `other` unless it is already present or is this hub.
    ///
    /// Returns `true` when the list changed.
    pub fn connect_to(&mut self, other: &str) -> bool {
        if other == self.hub_id || self.is_connected_to(other) {
            return false;
        }
        self.connections.push(other.to_string());
        true
    }

    /// Public view of this hub as returned by the listing endpoint
    pub fn view(&self) -> HubView {
        HubView {
            name: self.name.clone(),
            connections: self.connections.clone(),
        }
    }
}

/// Hub as it appears in the `hubId -> {name, connections}` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubView {
    pub name: String,
    pub connections: Vec<String>,
}

/// Treat absent and empty strings alike
fn required(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Request to create a new hub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddHubRequest {
    #[serde(rename = "hubId")]
    pub hub_id: Option<String>,
    pub name: Option<String>,
}

impl AddHubRequest {
    pub fn new(hub_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hub_id: Some(hub_id.into()),
            name: Some(name.into()),
        }
    }

    /// Check required fields and produce the hub to insert
    pub fn validate(self) -> HubResult<Hub> {
        match (required(self.hub_id), required(self.name)) {
            (Some(hub_id), Some(name)) => Ok(Hub::new(hub_id, name)),
            _ => Err(HubError::validation("hubId and name required")),
        }
    }
}

/// Request to connect two hubs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectHubsRequest {
    #[serde(rename = "hubA")]
    pub hub_a: Option<String>,
    #[serde(rename = "hubB")]
    pub hub_b: Option<String>,
}

impl ConnectHubsRequest {
    pub fn new(hub_a: impl Into<String>, hub_b: impl Into<String>) -> Self {
        Self {
            hub_a: Some(hub_a.into()),
            hub_b: Some(hub_b.into()),
        }
    }

    /// Returns the two distinct endpoints
    pub fn validate(self) -> HubResult<(String, String)> {
        let (a, b) = match (required(self.hub_a), required(self.hub_b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(HubError::validation("hubA and hubB required")),
        };
        if a == b {
            return Err(HubError::self_connection(a));
        }
        Ok((a, b))
    }
}

/// Request for a shortest path between two hubs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Option<String>,
    pub dest: Option<String>,
}

impl ShortestPathRequest {
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            dest: Some(dest.into()),
        }
    }

    pub fn validate(self) -> HubResult<(String, String)> {
        match (required(self.source), required(self.dest)) {
            (Some(source), Some(dest)) => Ok((source, dest)),
            _ => Err(HubError::validation("source and dest required")),
        }
    }
}

/// Shortest path answer; empty when the hubs are not connected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_to_skips_duplicates_and_self() {
        let mut hub = Hub::new("A", "Alpha");
        assert!(hub.connect_to("B"));
        assert!(!hub.connect_to("B"));
        assert!(!hub.connect_to("A"));
        assert_eq!(hub.connections, vec!["B".to_string()]);
    }

    #[test]
    fn test_hub_wire_format() {
        let hub = Hub::new("A", "Alpha").with_connection("B");
        let json = serde_json::to_value(&hub).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hubId": "A", "name": "Alpha", "connections": ["B"]})
        );
    }

    #[test]
    fn test_add_hub_request_requires_both_fields() {
        let req: AddHubRequest = serde_json::from_str(r#"{"hubId": "A"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "hubId and name required");

        let req: AddHubRequest = serde_json::from_str(r#"{"hubId": "", "name": "X"}"#).unwrap();
        assert!(req.validate().is_err());

        let hub = AddHubRequest::new("A", "X").validate().unwrap();
        assert_eq!(hub, Hub::new("A", "X"));
    }

    #[test]
    fn test_connect_request_rejects_same_hub() {
        let err = ConnectHubsRequest::new("A", "A").validate().unwrap_err();
        assert!(matches!(err, HubError::SelfConnection { .. }));

        let req: ConnectHubsRequest = serde_json::from_str(r#"{"hubA": "A"}"#).unwrap();
        assert_eq!(req.validate().unwrap_err().to_string(), "hubA and hubB required");
    }

    #[test]
    fn test_shortest_path_request_validation() {
        let req: ShortestPathRequest = serde_json::from_str(r#"{"dest": "B"}"#).unwrap();
        assert_eq!(req.validate().unwrap_err().to_string(), "source and dest required");

        let (source, dest) = ShortestPathRequest::new("A", "A").validate().unwrap();
        assert_eq!((source.as_str(), dest.as_str()), ("A", "A"));
    }
}
