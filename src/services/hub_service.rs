//! Hub service: validation, invariants and graph queries

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::graph::{shortest_path, HubGraph};
use crate::metrics;
use crate::models::{
    AddHubRequest, ConnectHubsRequest, Hub, HubError, HubResult, HubView, ShortestPathRequest,
};
use crate::store::HubStore;

/// Hub service handling business logic and validation
pub struct HubService {
    store: Arc<HubStore>,
    /// Serializes read-check-write sequences of mutations
    write_lock: Mutex<()>,
}

impl HubService {
    /// Create a new hub service
    pub fn new(store: Arc<HubStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &HubStore {
        &self.store
    }

    /// Create a new hub with no connections
    pub fn add_hub(&self, req: AddHubRequest) -> HubResult<Hub> {
        let hub = req.validate()?;

        let _guard = self.write_lock.lock();
        if self.store.contains_hub(&hub.hub_id)? {
            return Err(HubError::already_exists(&hub.hub_id));
        }
        self.store.put_hub(&hub)?;

        info!("Added hub {} ({})", hub.hub_id, hub.name);
        metrics::record_hub_added();
        Ok(hub)
    }

    /// Connect two hubs in both directions.
    ///
    /// Connecting an already connected pair succeeds without writing.
    pub fn connect_hubs(&self, req: ConnectHubsRequest) -> HubResult<()> {
        let (a_id, b_id) = req.validate()?;

        let _guard = self.write_lock.lock();
        let mut hub_a = self.get_hub(&a_id)?;
        let mut hub_b = self.get_hub(&b_id)?;

        let changed_a = hub_a.connect_to(&b_id);
        let changed_b = hub_b.connect_to(&a_id);

        match (changed_a, changed_b) {
            (false, false) => {
                debug!("Hubs {} and {} already connected", a_id, b_id);
                return Ok(());
            }
            (true, true) => self.store.put_hubs([&hub_a, &hub_b])?,
            (true, false) => self.store.put_hub(&hub_a)?,
            (false, true) => self.store.put_hub(&hub_b)?,
        }

        info!("Connected hubs {} <-> {}", a_id, b_id);
        metrics::record_connection_made();
        Ok(())
    }

    /// Get a hub by id
    pub fn get_hub(&self, hub_id: &str) -> HubResult<Hub> {
        self.store
            .get_hub(hub_id)?
            .ok_or_else(|| HubError::not_found(hub_id))
    }

    /// Every hub keyed by id
    pub fn list_hubs(&self) -> HubResult<BTreeMap<String, HubView>> {
        let hubs = self.store.list_hubs()?;
        Ok(hubs
            .into_iter()
            .map(|hub| {
                let view = hub.view();
                (hub.hub_id, view)
            })
            .collect())
    }

    /// Snapshot the whole store as an adjacency list
    pub fn load_graph(&self) -> HubResult<HubGraph> {
        Ok(HubGraph::from_hubs(self.store.list_hubs()?))
    }

    /// Shortest path by hop count; empty when the hubs are not connected
    pub fn shortest_path(&self, req: ShortestPathRequest) -> HubResult<Vec<String>> {
        let (source, dest) = req.validate()?;
        let started = Instant::now();

        let graph = self.load_graph()?;
        let path = shortest_path(&graph, &source, &dest)?;

        metrics::record_path_query(started.elapsed().as_secs_f64());
        debug!(
            "Shortest path {} -> {}: {} hops over {} hubs",
            source,
            dest,
            path.len().saturating_sub(1),
            graph.node_count()
        );
        Ok(path)
    }

    /// Count stored hubs and publish the gauge
    pub fn refresh_hub_count(&self) -> HubResult<u64> {
        let count = self.store.count_hubs()?;
        metrics::set_hubs_total(count as i64);
        Ok(count)
    }
}
