//! In-memory adjacency list built from a hub snapshot

use std::collections::HashMap;

use crate::models::Hub;

/// Hub id to ordered neighbor ids
#[derive(Debug, Clone, Default)]
pub struct HubGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl HubGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from every hub in a snapshot.
    ///
    /// Neighbor order is preserved; it decides which of several equally
    /// short paths a search returns.
    pub fn from_hubs<I>(hubs: I) -> Self
    where
        I: IntoIterator<Item = Hub>,
    {
        let adjacency = hubs
            .into_iter()
            .map(|hub| (hub.hub_id, hub.connections))
            .collect();
        Self { adjacency }
    }

    /// Insert or replace a node with its neighbor list
    pub fn insert(&mut self, hub_id: impl Into<String>, neighbors: Vec<String>) {
        self.adjacency.insert(hub_id.into(), neighbors);
    }

    pub fn contains(&self, hub_id: &str) -> bool {
        self.adjacency.contains_key(hub_id)
    }

    /// Neighbors of a node; ids without a record have none
    pub fn neighbors(&self, hub_id: &str) -> &[String] {
        self.adjacency
            .get(hub_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. A symmetric pair counts once; a one-sided
    /// entry left behind by an interrupted write still counts.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for (id, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                let mirrored = self.neighbors(neighbor).iter().any(|n| n == id);
                if !mirrored || id < neighbor {
                    count += 1;
                }
            }
        }
        count
    }
}
