use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::SearchStats;
use crate::graph::{DirectedGraph, Graph, Position};
use crate::{Distance, NodeId, Weight};

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    #[serde(default)]
    pub is_source: bool,
    #[serde(default)]
    pub is_target: bool,
    #[serde(default)]
    pub on_path: bool,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    #[serde(default)]
    pub max_out_degree: Option<usize>,
    /// Redraw targets that hit the source instead of skipping them
    #[serde(default)]
    pub redraw_self_loops: bool,
}

fn default_node_count() -> usize {
    6
}

/// Shortest path query between two nodes of a session graph
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    pub source: NodeId,
    pub target: NodeId,
}

/// Response containing a shortest path query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: NodeId,
    pub target: NodeId,
    /// Ordered node sequence from source to target, empty if unreachable
    pub path: Vec<NodeId>,
    pub reachable: bool,
    pub distance: Option<Distance>,
    pub execution_time_ms: f64,
    /// Distances of reachable nodes only
    pub distances: HashMap<NodeId, Distance>,
    pub predecessors: HashMap<NodeId, Option<NodeId>>,
    pub stats: SearchStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session owning one generated graph, its reset snapshot and the current query
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Graph queries currently run against
    pub graph: Arc<DirectedGraph>,
    /// Snapshot restored by reset
    pub initial_graph: Arc<DirectedGraph>,
    pub positions: Vec<Position>,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
    /// Bumped on every reset
    pub revision: u64,
}

impl Session {
    pub fn new(graph: DirectedGraph, positions: Vec<Position>) -> Self {
        let graph = Arc::new(graph);
        Self {
            id: Uuid::new_v4(),
            initial_graph: Arc::clone(&graph),
            graph,
            positions,
            last_result: None,
            created_at: Utc::now(),
            revision: 0,
        }
    }

    /// Restores the initial graph and forgets the current query
    pub fn reset(&mut self) {
        self.graph = Arc::clone(&self.initial_graph);
        self.last_result = None;
        self.revision += 1;
    }

    /// Stores `result` as the current query if it was computed at `revision`.
    /// Returns false when a reset happened in between.
    pub fn record_result(&mut self, revision: u64, result: PathResponse) -> bool {
        if revision != self.revision {
            return false;
        }
        self.last_result = Some(result);
        true
    }

    /// Builds the web representation, highlighting the current path if any
    pub fn web_graph(&self) -> WebGraph {
        let result = self.last_result.as_ref();
        let path: &[NodeId] = result.map(|r| r.path.as_slice()).unwrap_or_default();
        let on_path: HashSet<NodeId> = path.iter().copied().collect();
        let path_edges: HashSet<(NodeId, NodeId)> =
            path.windows(2).map(|hop| (hop[0], hop[1])).collect();

        let nodes = self
            .graph
            .node_ids()
            .map(|id| {
                let position = self.positions.get(id).copied().unwrap_or(Position { x: 0.0, y: 0.0 });
                WebNode {
                    id,
                    label: id.to_string(),
                    x: position.x,
                    y: position.y,
                    distance: result.and_then(|r| r.distances.get(&id).copied()),
                    is_source: result.map_or(false, |r| r.source == id),
                    is_target: result.map_or(false, |r| r.target == id),
                    on_path: on_path.contains(&id),
                }
            })
            .collect();

        let links = self
            .graph
            .edges()
            .map(|(source, target, weight)| WebEdge {
                source,
                target,
                weight,
                is_path: path_edges.contains(&(source, target)),
            })
            .collect();

        WebGraph { nodes, links }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            graph: self.web_graph(),
            last_result: self.last_result.clone(),
            created_at: self.created_at,
        }
    }
}

/// Serialized form of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub graph: WebGraph,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
}
