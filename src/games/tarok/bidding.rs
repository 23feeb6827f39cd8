//! Bidding: who declares and which contract is played.
//!
//! Bidding starts with seat 1 and goes around the table, skipping seats
//! that have passed; a pass is final. A lower seat index has priority, so
//! it may hold (repeat) the highest outstanding bid, while a later seat
//! must outbid it. The round ends when a seat bids while every other seat
//! has passed. If everybody else passes, the forehand (seat 0) must bid and
//! may additionally choose Klop or Three.

use super::contracts::{Contract, PASS};
use crate::core::{Action, PlayerId, PlayerMap};

/// Lowest bid a seat can make while other seats are still bidding.
const LOWEST_OPEN_BID: Action = 3;

/// Highest bid action.
const HIGHEST_BID: Action = 12;

/// The forehand, who has priority and bids last in the first round.
pub const FOREHAND: PlayerId = PlayerId(0);

/// The seat that opens the bidding.
pub const FIRST_BIDDER: PlayerId = PlayerId(1);

/// Latest bid per seat. `None` means the seat has not spoken yet.
pub type Bids = PlayerMap<Option<Action>>;

/// Result of applying a bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidOutcome {
    /// Bidding continues with the given seat.
    Continue(PlayerId),
    /// Bidding is over.
    Won { declarer: PlayerId, contract: Contract },
}

fn all_others_passed(bids: &Bids, current: PlayerId) -> bool {
    bids.iter()
        .filter(|(player, _)| *player != current)
        .all(|(_, bid)| *bid == Some(PASS))
}

/// The highest bid so far and the first seat holding it.
fn highest_bid(bids: &Bids) -> (Option<Action>, PlayerId) {
    let mut best = (None, FOREHAND);
    for (player, &bid) in bids.iter() {
        if bid > best.0 {
            best = (bid, player);
        }
    }
    best
}

/// Legal bids for `current`, ascending.
#[must_use]
pub fn legal_bids(bids: &Bids, current: PlayerId) -> Vec<Action> {
    let num_players = bids.player_count();
    let others_passed = all_others_passed(bids, current);
    let mut actions = Vec::new();

    if current == FOREHAND && bids[current].is_none() && others_passed {
        actions.push(Contract::Klop.bid_action());
        actions.push(Contract::Three.bid_action());
    } else if !others_passed {
        actions.push(PASS);
    }

    let (max_bid, max_bid_player) = highest_bid(bids);
    let max_bid = max_bid.unwrap_or(PASS);
    for action in LOWEST_OPEN_BID..=HIGHEST_BID {
        let solo = Contract::from_bid(action).is_some_and(Contract::is_solo_with_exchange);
        if num_players == 3 && solo {
            continue;
        }
        if action > max_bid || (action == max_bid && current <= max_bid_player) {
            actions.push(action);
        }
    }
    actions
}

/// Record `action` for `current` and decide who speaks next.
///
/// The bid must be legal for `current`.
pub fn apply_bid(bids: &mut Bids, current: PlayerId, action: Action) -> BidOutcome {
    bids[current] = Some(action);

    if all_others_passed(bids, current) {
        if let Some(contract) = Contract::from_bid(action) {
            return BidOutcome::Won {
                declarer: current,
                contract,
            };
        }
    }

    let num_players = bids.player_count();
    let next = (1..num_players)
        .map(|offset| current.offset(offset, num_players))
        .find(|&player| bids[player] != Some(PASS))
        .unwrap_or(current);
    BidOutcome::Continue(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(num_players: usize) -> Bids {
        PlayerMap::with_value(num_players, None)
    }

    #[test]
    fn test_first_bidder_options() {
        let bids = fresh(3);
        assert_eq!(legal_bids(&bids, FIRST_BIDDER), vec![0, 3, 4, 8, 9, 10, 11, 12]);

        let bids = fresh(4);
        assert_eq!(
            legal_bids(&bids, FIRST_BIDDER),
            vec![0, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_forehand_after_all_pass() {
        let mut bids = fresh(3);
        assert_eq!(apply_bid(&mut bids, PlayerId(1), PASS), BidOutcome::Continue(PlayerId(2)));
        assert_eq!(apply_bid(&mut bids, PlayerId(2), PASS), BidOutcome::Continue(PlayerId(0)));
        assert_eq!(legal_bids(&bids, FOREHAND), vec![1, 2, 3, 4, 8, 9, 10, 11, 12]);

        assert_eq!(
            apply_bid(&mut bids, FOREHAND, 1),
            BidOutcome::Won {
                declarer: FOREHAND,
                contract: Contract::Klop
            }
        );
    }

    #[test]
    fn test_priority_allows_holding() {
        let mut bids = fresh(3);
        apply_bid(&mut bids, PlayerId(1), 3);
        // Seat 2 has lower priority than seat 1 and must outbid.
        assert_eq!(legal_bids(&bids, PlayerId(2)), vec![0, 4, 8, 9, 10, 11, 12]);
        apply_bid(&mut bids, PlayerId(2), PASS);
        // The forehand may hold seat 1's bid.
        assert_eq!(legal_bids(&bids, FOREHAND), vec![0, 3, 4, 8, 9, 10, 11, 12]);
        assert_eq!(apply_bid(&mut bids, FOREHAND, 3), BidOutcome::Continue(PlayerId(1)));
        // Seat 1 now has to outbid the forehand.
        assert_eq!(legal_bids(&bids, PlayerId(1)), vec![0, 4, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_passed_seats_are_skipped() {
        let mut bids = fresh(4);
        apply_bid(&mut bids, PlayerId(1), 3);
        apply_bid(&mut bids, PlayerId(2), PASS);
        apply_bid(&mut bids, PlayerId(3), 4);
        assert_eq!(apply_bid(&mut bids, FOREHAND, 4), BidOutcome::Continue(PlayerId(1)));
        assert_eq!(apply_bid(&mut bids, PlayerId(1), PASS), BidOutcome::Continue(PlayerId(3)));
    }

    #[test]
    fn test_last_bidder_confirms() {
        let mut bids = fresh(3);
        apply_bid(&mut bids, PlayerId(1), 8);
        apply_bid(&mut bids, PlayerId(2), PASS);
        assert_eq!(apply_bid(&mut bids, FOREHAND, PASS), BidOutcome::Continue(PlayerId(1)));
        // No pass once everyone else has passed.
        assert_eq!(legal_bids(&bids, PlayerId(1)), vec![8, 9, 10, 11, 12]);
        assert_eq!(
            apply_bid(&mut bids, PlayerId(1), 8),
            BidOutcome::Won {
                declarer: PlayerId(1),
                contract: Contract::Beggar
            }
        );
    }
}
