//! The transport graph.
//!
//! Locations are nodes; each connected pair of locations carries the set of
//! transport modes linking them. Edges are undirected: travelling A→B uses
//! the same modes as B→A.
//!
//! The graph is read-only once a game starts. It serializes as a sorted
//! edge list, and deserializing rebuilds (and validates) the adjacency.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::ticket::Transport;

/// A location on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One transport link between two locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub transport: Transport,
}

/// Transport modes on one node pair. Real boards never exceed two.
type Modes = SmallVec<[Transport; 2]>;

/// Undirected multigraph of locations and transport links.
///
/// ## Usage
///
/// ```
/// use scotland_yard::core::{NodeId, Transport, TransportGraph};
///
/// let graph = TransportGraph::new()
///     .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
///     .with_edge(NodeId(1), NodeId(2), Transport::Bus)
///     .with_edge(NodeId(2), NodeId(3), Transport::Underground);
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.transports(NodeId(2), NodeId(1)), &[Transport::Taxi, Transport::Bus]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Edge>", into = "Vec<Edge>")]
pub struct TransportGraph {
    /// node -> neighbour -> modes
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, Modes>>,

    /// Number of connected node pairs.
    edge_count: usize,
}

impl TransportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transport link (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, a: NodeId, b: NodeId, transport: Transport) -> Self {
        self.add_edge(a, b, transport);
        self
    }

    /// Add a transport link between `a` and `b`.
    ///
    /// Adding a mode the pair already has is a no-op.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, transport: Transport) {
        let forward = self.adjacency.entry(a).or_default().entry(b).or_default();
        if forward.contains(&transport) {
            return;
        }
        if forward.is_empty() {
            self.edge_count += 1;
        }
        insert_sorted(forward, transport);
        insert_sorted(
            self.adjacency.entry(b).or_default().entry(a).or_default(),
            transport,
        );
    }

    /// Number of connected node pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the graph has no edges at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over the nodes linked to `node` (unordered).
    ///
    /// Unknown nodes have no neighbours.
    pub fn adjacent_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.keys().copied())
    }

    /// Transport modes linking `a` and `b`, sorted.
    ///
    /// Empty if the pair is not linked.
    #[must_use]
    pub fn transports(&self, a: NodeId, b: NodeId) -> &[Transport] {
        self.adjacency
            .get(&a)
            .and_then(|neighbours| neighbours.get(&b))
            .map(|modes| modes.as_slice())
            .unwrap_or(&[])
    }

    /// All edges, each reported once with `source < destination`, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(&source, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |(destination, _)| source < **destination)
                    .flat_map(move |(&destination, modes)| {
                        modes.iter().map(move |&transport| Edge {
                            source,
                            destination,
                            transport,
                        })
                    })
            })
            .collect();
        edges.sort();
        edges
    }
}

fn insert_sorted(modes: &mut Modes, transport: Transport) {
    let at = modes.partition_point(|&m| m < transport);
    if modes.get(at) != Some(&transport) {
        modes.insert(at, transport);
    }
}

impl TryFrom<Vec<Edge>> for TransportGraph {
    type Error = GameError;

    fn try_from(edges: Vec<Edge>) -> Result<Self, Self::Error> {
        edges.into_iter().try_fold(Self::new(), |graph, edge| {
            if edge.source == edge.destination {
                return Err(GameError::InvalidEdge {
                    from: edge.source,
                    to: edge.destination,
                });
            }
            Ok(graph.with_edge(edge.source, edge.destination, edge.transport))
        })
    }
}

impl From<TransportGraph> for Vec<Edge> {
    fn from(graph: TransportGraph) -> Self {
        graph.edges()
    }
}
