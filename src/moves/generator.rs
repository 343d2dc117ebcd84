//! Legal move enumeration.
//!
//! All functions here are pure: they take the setup, the players and the
//! occupancy explicitly and return a freshly built set. Sets (not lists) are
//! returned because two parallel edges of the same mode justify the same
//! move; tickets are per mode, not per edge.
//!
//! ## Occupancy
//!
//! A piece may never end a hop on a node held by a detective other than
//! itself. MrX's location is *not* occupied for detectives: moving onto it
//! is how they win.

use im::{OrdSet, Vector};
use smallvec::SmallVec;

use crate::core::{GameSetup, NodeId, Piece, Player, Ticket};

use super::action::{DoubleMove, Move, SingleMove};

/// Locations a piece cannot move onto. Boards seat at most six players.
pub type Occupied = SmallVec<[NodeId; 6]>;

/// Locations of every detective except `mover`.
#[must_use]
pub fn occupied_locations(detectives: &Vector<Player>, mover: Piece) -> Occupied {
    detectives
        .iter()
        .filter(|d| d.piece() != mover)
        .map(Player::location)
        .collect()
}

/// Every legal one-hop move for `player` from `source`.
///
/// For each unoccupied neighbour: one move per edge mode whose ticket the
/// player holds, plus a Secret move if the player holds a Secret ticket.
#[must_use]
pub fn single_moves(
    setup: &GameSetup,
    occupied: &[NodeId],
    player: &Player,
    source: NodeId,
) -> OrdSet<SingleMove> {
    let piece = player.piece();
    let mut moves = OrdSet::new();

    for destination in setup.graph.adjacent_nodes(source) {
        if occupied.contains(&destination) {
            continue;
        }

        for transport in setup.graph.transports(source, destination) {
            let ticket = transport.required_ticket();
            if player.has(ticket) {
                moves.insert(SingleMove::new(piece, source, ticket, destination));
            }
        }

        if player.has(Ticket::Secret) {
            moves.insert(SingleMove::new(piece, source, Ticket::Secret, destination));
        }
    }

    moves
}

/// Every legal double move for `player` from `source`.
///
/// Empty unless the player holds a Double ticket and at least two rounds
/// remain. Each first leg is applied hypothetically (ticket spent, player
/// relocated) before the second leg is enumerated, so two legs of the same
/// kind need two tickets of that kind. The second leg may return through
/// `source`: only detectives occupy nodes.
#[must_use]
pub fn double_moves(
    setup: &GameSetup,
    occupied: &[NodeId],
    player: &Player,
    source: NodeId,
    rounds_remaining: usize,
) -> OrdSet<DoubleMove> {
    if !player.has(Ticket::Double) || rounds_remaining < 2 {
        return OrdSet::new();
    }

    let mut moves = OrdSet::new();
    for first in single_moves(setup, occupied, player, source) {
        let moved = player.use_ticket(first.ticket).at(first.destination);
        for second in single_moves(setup, occupied, &moved, first.destination) {
            moves.insert(DoubleMove::chain(first, second));
        }
    }

    moves
}

/// Check if a detective has at least one legal single move.
#[must_use]
pub fn can_move(setup: &GameSetup, detectives: &Vector<Player>, detective: &Player) -> bool {
    let occupied = occupied_locations(detectives, detective.piece());
    !single_moves(setup, &occupied, detective, detective.location()).is_empty()
}

/// All moves of MrX: single moves plus double moves.
#[must_use]
pub fn mr_x_moves(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    rounds_remaining: usize,
) -> OrdSet<Move> {
    let occupied = occupied_locations(detectives, mr_x.piece());
    let source = mr_x.location();

    let singles = single_moves(setup, &occupied, mr_x, source)
        .into_iter()
        .map(Move::Single);
    let doubles = double_moves(setup, &occupied, mr_x, source, rounds_remaining)
        .into_iter()
        .map(Move::Double);

    singles.chain(doubles).collect()
}

/// All moves of one detective (single moves only).
#[must_use]
pub fn detective_moves(
    setup: &GameSetup,
    detectives: &Vector<Player>,
    detective: &Player,
) -> OrdSet<Move> {
    let occupied = occupied_locations(detectives, detective.piece());
    single_moves(setup, &occupied, detective, detective.location())
        .into_iter()
        .map(Move::Single)
        .collect()
}

/// Union of the moves of every piece still to act this round.
///
/// Does not consult the winner; callers short-circuit on a finished game.
#[must_use]
pub fn available_moves(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    remaining: &OrdSet<Piece>,
    rounds_remaining: usize,
) -> OrdSet<Move> {
    let mut moves = OrdSet::new();

    if remaining.contains(&mr_x.piece()) {
        moves = moves.union(mr_x_moves(setup, mr_x, detectives, rounds_remaining));
    }

    for detective in detectives.iter().filter(|d| remaining.contains(&d.piece())) {
        moves = moves.union(detective_moves(setup, detectives, detective));
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Detective, Tickets, Transport, TransportGraph};

    const RED: Piece = Piece::Detective(Detective::Red);

    fn line_setup() -> GameSetup {
        // 1 -taxi- 2 -taxi- 3 -bus- 4
        let graph = TransportGraph::new()
            .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
            .with_edge(NodeId(2), NodeId(3), Transport::Taxi)
            .with_edge(NodeId(3), NodeId(4), Transport::Bus);
        GameSetup::new(graph, vec![false; 5])
    }

    fn mr_x(tickets: Tickets, at: u32) -> Player {
        Player::new(Piece::MrX, tickets, NodeId(at))
    }

    #[test]
    fn test_single_moves_need_tickets() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 1), 3);

        let moves = single_moves(&setup, &[], &player, NodeId(3));
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&SingleMove::new(Piece::MrX, NodeId(3), Ticket::Taxi, NodeId(2))));
    }

    #[test]
    fn test_single_moves_skip_occupied() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 1), 2);

        let moves = single_moves(&setup, &[NodeId(1)], &player, NodeId(2));
        assert_eq!(moves.len(), 1);
        assert!(moves.iter().all(|m| m.destination == NodeId(3)));
    }

    #[test]
    fn test_secret_covers_any_mode() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Secret, 1), 3);

        let moves = single_moves(&setup, &[], &player, NodeId(3));
        let destinations: Vec<_> = moves.iter().map(|m| m.destination).collect();
        assert_eq!(destinations, vec![NodeId(2), NodeId(4)]);
        assert!(moves.iter().all(|m| m.ticket == Ticket::Secret));
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let graph = TransportGraph::new()
            .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
            .with_edge(NodeId(1), NodeId(2), Transport::Bus);
        let setup = GameSetup::new(graph, vec![true]);
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 1).with(Ticket::Bus, 1), 1);

        let moves = single_moves(&setup, &[], &player, NodeId(1));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_ferry_needs_secret() {
        let graph = TransportGraph::new().with_edge(NodeId(1), NodeId(2), Transport::Ferry);
        let setup = GameSetup::new(graph, vec![true]);

        let without = mr_x(Tickets::default_detective(), 1);
        assert!(single_moves(&setup, &[], &without, NodeId(1)).is_empty());

        let with = mr_x(Tickets::new().with(Ticket::Secret, 1), 1);
        let moves = single_moves(&setup, &[], &with, NodeId(1));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn test_double_moves_need_double_ticket() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 2), 1);

        assert!(double_moves(&setup, &[], &player, NodeId(1), 5).is_empty());
    }

    #[test]
    fn test_double_moves_need_two_rounds() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 2).with(Ticket::Double, 1), 1);

        assert!(double_moves(&setup, &[], &player, NodeId(1), 1).is_empty());
        assert!(!double_moves(&setup, &[], &player, NodeId(1), 2).is_empty());
    }

    #[test]
    fn test_double_moves_same_kind_needs_two() {
        let setup = line_setup();
        let one_taxi = mr_x(Tickets::new().with(Ticket::Taxi, 1).with(Ticket::Double, 1), 1);
        assert!(double_moves(&setup, &[], &one_taxi, NodeId(1), 5).is_empty());

        let two_taxis = mr_x(Tickets::new().with(Ticket::Taxi, 2).with(Ticket::Double, 1), 1);
        let moves = double_moves(&setup, &[], &two_taxis, NodeId(1), 5);
        // 1->2->1 and 1->2->3
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_double_moves_may_return_to_source() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 2).with(Ticket::Double, 1), 1);

        let moves = double_moves(&setup, &[], &player, NodeId(1), 5);
        assert!(moves.iter().any(|m| m.destination2 == NodeId(1)));
    }

    #[test]
    fn test_double_moves_respect_occupied_second_leg() {
        let setup = line_setup();
        let player = mr_x(Tickets::new().with(Ticket::Taxi, 2).with(Ticket::Double, 1), 1);

        let moves = double_moves(&setup, &[NodeId(3)], &player, NodeId(1), 5);
        assert_eq!(moves.len(), 1);
        assert!(moves.iter().all(|m| m.destination2 == NodeId(1)));
    }

    #[test]
    fn test_secret_pairs() {
        let setup = line_setup();
        let player = mr_x(
            Tickets::new().with(Ticket::Secret, 1).with(Ticket::Bus, 1).with(Ticket::Double, 1),
            2,
        );

        let moves = double_moves(&setup, &[], &player, NodeId(2), 5);
        // One secret only: secret then bus (2->3->4) is the only combination
        assert_eq!(moves.len(), 1);
        let m = moves.iter().next().unwrap();
        assert_eq!((m.ticket1, m.ticket2), (Ticket::Secret, Ticket::Bus));
        assert_eq!(m.destination2, NodeId(4));
    }

    #[test]
    fn test_secret_pairs_with_itself() {
        let setup = line_setup();
        let two_secrets = mr_x(Tickets::new().with(Ticket::Secret, 2).with(Ticket::Double, 1), 2);

        let moves = double_moves(&setup, &[], &two_secrets, NodeId(2), 5);
        let legs: Vec<_> = moves
            .iter()
            .map(|m| (m.ticket1, m.destination1, m.ticket2, m.destination2))
            .collect();
        assert_eq!(
            legs,
            vec![
                (Ticket::Secret, NodeId(1), Ticket::Secret, NodeId(2)),
                (Ticket::Secret, NodeId(3), Ticket::Secret, NodeId(2)),
                (Ticket::Secret, NodeId(3), Ticket::Secret, NodeId(4)),
            ]
        );

        let one_secret = mr_x(Tickets::new().with(Ticket::Secret, 1).with(Ticket::Double, 1), 2);
        let moves = double_moves(&setup, &[], &one_secret, NodeId(2), 5);
        assert!(moves
            .iter()
            .all(|m| (m.ticket1, m.ticket2) != (Ticket::Secret, Ticket::Secret)));
        assert!(moves.is_empty());
    }

    #[test]
    fn test_occupied_excludes_mover() {
        let detectives = Vector::from(vec![
            Player::new(RED, Tickets::new(), NodeId(1)),
            Player::new(Piece::Detective(Detective::Blue), Tickets::new(), NodeId(2)),
        ]);

        assert_eq!(occupied_locations(&detectives, RED).as_slice(), &[NodeId(2)]);
        assert_eq!(occupied_locations(&detectives, Piece::MrX).len(), 2);
    }

    #[test]
    fn test_can_move() {
        let setup = line_setup();
        let red = Player::new(RED, Tickets::new().with(Ticket::Taxi, 1), NodeId(1));
        let blue = Player::new(
            Piece::Detective(Detective::Blue),
            Tickets::new().with(Ticket::Taxi, 1),
            NodeId(2),
        );
        let detectives = Vector::from(vec![red, blue]);

        // Red's only neighbour is held by Blue
        assert!(!can_move(&setup, &detectives, &red));
        assert!(can_move(&setup, &detectives, &blue));
    }

    #[test]
    fn test_available_moves_only_remaining() {
        let setup = line_setup();
        let x = mr_x(Tickets::new().with(Ticket::Taxi, 1), 1);
        let red = Player::new(RED, Tickets::new().with(Ticket::Bus, 1), NodeId(4));
        let detectives = Vector::from(vec![red]);

        let mr_x_turn = available_moves(&setup, &x, &detectives, &OrdSet::unit(Piece::MrX), 5);
        assert!(mr_x_turn.iter().all(|m| m.piece() == Piece::MrX));
        assert_eq!(mr_x_turn.len(), 1);

        let red_turn = available_moves(&setup, &x, &detectives, &OrdSet::unit(RED), 5);
        assert_eq!(red_turn.len(), 1);
        assert!(red_turn.iter().all(|m| m.piece() == RED));
    }
}
