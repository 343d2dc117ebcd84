//! Shared boards for integration tests.

#![allow(dead_code)]

use scotland_yard::{
    Detective, GameBuilder, GameState, NodeId, Piece, Player, Ticket, Tickets, Transport,
    TransportGraph,
};

pub const RED: Piece = Piece::Detective(Detective::Red);
pub const BLUE: Piece = Piece::Detective(Detective::Blue);

/// Nodes 1..=n joined in a line by taxi edges.
pub fn taxi_line(n: u32) -> TransportGraph {
    (1..n).fold(TransportGraph::new(), |graph, i| {
        graph.with_edge(NodeId(i), NodeId(i + 1), Transport::Taxi)
    })
}

/// A 20-node ring with bus chords, two underground lines and a ferry.
pub fn ring_board() -> TransportGraph {
    let mut graph = TransportGraph::new();
    for i in 1..=20 {
        graph.add_edge(NodeId(i), NodeId(i % 20 + 1), Transport::Taxi);
    }
    for i in (1..=15).step_by(2) {
        graph.add_edge(NodeId(i), NodeId(i + 5), Transport::Bus);
    }
    graph.add_edge(NodeId(1), NodeId(11), Transport::Underground);
    graph.add_edge(NodeId(6), NodeId(16), Transport::Underground);
    graph.add_edge(NodeId(5), NodeId(15), Transport::Ferry);
    graph
}

/// Five detectives and MrX on the ring board with standard tickets.
pub fn ring_game() -> GameState {
    GameBuilder::new(ring_board())
        .mr_x(NodeId(1))
        .detective(Detective::Red, NodeId(4))
        .detective(Detective::Green, NodeId(8))
        .detective(Detective::Blue, NodeId(12))
        .detective(Detective::White, NodeId(16))
        .detective(Detective::Yellow, NodeId(19))
        .build()
        .expect("ring game is valid")
}

pub fn taxis(n: u32) -> Tickets {
    Tickets::new().with(Ticket::Taxi, n)
}

pub fn player(piece: Piece, tickets: Tickets, at: u32) -> Player {
    Player::new(piece, tickets, NodeId(at))
}
