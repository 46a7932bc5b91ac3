//! Round-robin role rotation.
//!
//! Each game round a team advances its describer by one seat and its leader
//! to the seat after that, both wrapping modulo the roster size. A team of
//! one ends up with the same player in both roles; that is accepted behavior.

/// The two roles produced by one rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePair {
    pub describer: i64,
    pub leader: i64,
}

/// Compute the next describer/leader pair for a seat-ordered roster.
///
/// `current_describer` is the player holding the role before this round, or
/// `None` before the first rotation. A describer that has since left the
/// roster counts as unset, restarting the cycle at seat 0.
///
/// Returns `None` for an empty roster; rotating an empty team is a
/// precondition violation the caller must reject.
pub fn advance(players: &[i64], current_describer: Option<i64>) -> Option<RolePair> {
    if players.is_empty() {
        return None;
    }

    let current_index = current_describer
        .and_then(|id| players.iter().position(|&p| p == id))
        .map(|i| i as isize)
        .unwrap_or(-1);

    let next_index = ((current_index + 1) as usize) % players.len();
    let leader_index = (next_index + 1) % players.len();

    Some(RolePair {
        describer: players[next_index],
        leader: players[leader_index],
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{advance, RolePair};

    const A: i64 = 11;
    const B: i64 = 22;
    const C: i64 = 33;

    #[test]
    fn first_rotation_starts_at_seat_zero() {
        let pair = advance(&[A, B, C], None).unwrap();
        assert_eq!(pair, RolePair { describer: A, leader: B });
    }

    #[test]
    fn three_player_walk() {
        let players = [A, B, C];
        let first = advance(&players, None).unwrap();
        assert_eq!((first.describer, first.leader), (A, B));

        let second = advance(&players, Some(first.describer)).unwrap();
        assert_eq!((second.describer, second.leader), (B, C));

        let third = advance(&players, Some(second.describer)).unwrap();
        assert_eq!((third.describer, third.leader), (C, A));

        // Cycle wraps back to the start.
        let fourth = advance(&players, Some(third.describer)).unwrap();
        assert_eq!((fourth.describer, fourth.leader), (A, B));
    }

    #[test]
    fn single_player_holds_both_roles() {
        let pair = advance(&[A], None).unwrap();
        assert_eq!(pair, RolePair { describer: A, leader: A });

        let again = advance(&[A], Some(A)).unwrap();
        assert_eq!(again, RolePair { describer: A, leader: A });
    }

    #[test]
    fn two_player_alternation() {
        let players = [A, B];
        let first = advance(&players, None).unwrap();
        assert_eq!((first.describer, first.leader), (A, B));

        let second = advance(&players, Some(A)).unwrap();
        assert_eq!((second.describer, second.leader), (B, A));
    }

    #[test]
    fn departed_describer_restarts_the_cycle() {
        // B was describing and then left the team.
        let pair = advance(&[A, C], Some(B)).unwrap();
        assert_eq!((pair.describer, pair.leader), (A, C));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(advance(&[], None), None);
        assert_eq!(advance(&[], Some(A)), None);
    }

    proptest! {
        /// Repeated rotations visit describer seats in strict cyclic order
        /// 0,1,...,n-1,0,... and the leader is always the following seat.
        #[test]
        fn rotation_is_cyclic(n in 1usize..8, rounds in 1usize..40) {
            let players: Vec<i64> = (0..n as i64).map(|i| 100 + i).collect();

            let mut current = None;
            for round in 0..rounds {
                let pair = advance(&players, current).unwrap();
                let expected_seat = round % n;
                prop_assert_eq!(pair.describer, players[expected_seat]);
                prop_assert_eq!(pair.leader, players[(expected_seat + 1) % n]);
                current = Some(pair.describer);
            }
        }
    }
}
