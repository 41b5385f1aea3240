//! Shortest path search over the hub graph using BFS

use std::collections::{HashSet, VecDeque};

use super::HubGraph;
use crate::models::{HubError, HubResult};

/// Find a shortest path (by hop count) from `source` to `dest`.
///
/// Both endpoints must be nodes of `graph`, otherwise `HubError::NotFound`
/// is returned without searching. The returned path includes both ends;
/// it is `[source]` when they are equal and empty when `dest` is
/// unreachable. Neighbors are explored in list order, so among equally
/// short paths the first one discovered wins.
pub fn shortest_path(graph: &HubGraph, source: &str, dest: &str) -> HubResult<Vec<String>> {
    for endpoint in [source, dest] {
        if !graph.contains(endpoint) {
            return Err(HubError::not_found(endpoint));
        }
    }

    let mut queue: VecDeque<(&str, Vec<String>)> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();

    queue.push_back((source, vec![source.to_string()]));
    visited.insert(source);

    while let Some((current, path)) = queue.pop_front() {
        if current == dest {
            return Ok(path);
        }

        for neighbor in graph.neighbors(current) {
            // Marked on enqueue so a node reached via two parents is queued once
            if visited.insert(neighbor.as_str()) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                queue.push_back((neighbor.as_str(), next));
            }
        }
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hub;

    /// Undirected graph from an edge list; isolated nodes listed separately
    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> HubGraph {
        let mut hubs: Vec<Hub> = nodes.iter().map(|id| Hub::new(*id, *id)).collect();
        for (a, b) in edges {
            for (from, to) in [(a, b), (b, a)] {
                if let Some(hub) = hubs.iter_mut().find(|h| h.hub_id == *from) {
                    hub.connect_to(to);
                }
            }
        }
        HubGraph::from_hubs(hubs)
    }

    fn assert_valid_path(g: &HubGraph, path: &[String], source: &str, dest: &str) {
        assert_eq!(path.first().map(String::as_str), Some(source));
        assert_eq!(path.last().map(String::as_str), Some(dest));
        for pair in path.windows(2) {
            assert!(
                g.neighbors(&pair[0]).contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_chain() {
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let path = shortest_path(&g, "A", "C").unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_same_source_and_dest() {
        let g = graph(&["A", "B"], &[("A", "B")]);
        assert_eq!(shortest_path(&g, "A", "A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_unreachable_is_empty() {
        let g = graph(&["A", "B"], &[]);
        assert!(shortest_path(&g, "A", "B").unwrap().is_empty());
    }

    #[test]
    fn test_missing_endpoint() {
        let g = graph(&["A"], &[]);
        assert!(matches!(
            shortest_path(&g, "A", "Z"),
            Err(HubError::NotFound { ref id }) if id == "Z"
        ));
        assert!(matches!(
            shortest_path(&g, "Z", "A"),
            Err(HubError::NotFound { ref id }) if id == "Z"
        ));
    }

    #[test]
    fn test_prefers_fewer_hops() {
        // A-B-C-D-E plus a shortcut A-F-E
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "F"), ("F", "E")],
        );
        let path = shortest_path(&g, "A", "E").unwrap();
        assert_eq!(path, vec!["A", "F", "E"]);
        assert_valid_path(&g, &path, "A", "E");
    }

    #[test]
    fn test_tie_broken_by_connection_order() {
        // Two 2-hop routes A-B-D and A-C-D; B was connected to A first
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert_eq!(shortest_path(&g, "A", "D").unwrap(), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(shortest_path(&g, "A", "D").unwrap().is_empty());
        assert_eq!(shortest_path(&g, "A", "C").unwrap(), vec!["A", "C"]);
    }

    #[test]
    fn test_dangling_reference_is_skipped() {
        let mut g = HubGraph::new();
        g.insert("A", vec!["ghost".to_string(), "B".to_string()]);
        g.insert("B", vec!["A".to_string()]);
        g.insert("C", vec![]);

        assert_eq!(shortest_path(&g, "A", "B").unwrap(), vec!["A", "B"]);
        assert!(shortest_path(&g, "A", "C").unwrap().is_empty());
    }

    #[test]
    fn test_path_length_matches_distance_on_grid() {
        // 4x4 grid, distance between corners is 6 hops
        let names: Vec<String> = (0..16).map(|i| format!("n{}", i)).collect();
        let nodes: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut edges = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let i = row * 4 + col;
                if col < 3 {
                    edges.push((nodes[i], nodes[i + 1]));
                }
                if row < 3 {
                    edges.push((nodes[i], nodes[i + 4]));
                }
            }
        }
        let g = graph(&nodes, &edges);

        let path = shortest_path(&g, "n0", "n15").unwrap();
        assert_eq!(path.len() - 1, 6);
        assert_valid_path(&g, &path, "n0", "n15");
    }
}
