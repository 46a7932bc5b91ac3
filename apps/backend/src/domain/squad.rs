//! Squad composition rules: capacity, duplicates, seat assignment.

use crate::errors::domain::{ConflictKind, DomainError};

/// Maximum number of players a team may hold.
pub const TEAM_CAPACITY: usize = 3;

/// Check whether a candidate may join the given roster.
pub fn admit(roster: &[i64], candidate: i64) -> Result<(), DomainError> {
    if roster.len() >= TEAM_CAPACITY {
        return Err(DomainError::conflict(
            ConflictKind::TeamFull,
            format!("team already holds {TEAM_CAPACITY} players"),
        ));
    }
    if roster.contains(&candidate) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateMember,
            format!("player {candidate} is already on the team"),
        ));
    }
    Ok(())
}

/// Seat for the next joiner. Seats are append-only and never renumbered, so
/// the next seat is one past the highest occupied one.
pub fn next_seat(seats: &[i16]) -> i16 {
    seats.iter().max().map_or(0, |max| max + 1)
}

/// Roster after removing a player, relative order preserved. The removed
/// flag distinguishes a real removal from the documented no-op on a
/// non-member.
pub fn without(roster: &[i64], user_id: i64) -> (Vec<i64>, bool) {
    let remaining: Vec<i64> = roster.iter().copied().filter(|&p| p != user_id).collect();
    let removed = remaining.len() != roster.len();
    (remaining, removed)
}

#[cfg(test)]
mod tests {
    use super::{admit, next_seat, without, TEAM_CAPACITY};
    use crate::errors::domain::{ConflictKind, DomainError};

    #[test]
    fn admit_accepts_free_seat() {
        assert!(admit(&[1, 2], 3).is_ok());
        assert!(admit(&[], 1).is_ok());
    }

    #[test]
    fn admit_rejects_full_team() {
        let roster = [1, 2, 3];
        assert_eq!(roster.len(), TEAM_CAPACITY);
        match admit(&roster, 4) {
            Err(DomainError::Conflict(ConflictKind::TeamFull, _)) => {}
            other => panic!("expected TeamFull, got {other:?}"),
        }
    }

    #[test]
    fn full_check_wins_over_duplicate_check() {
        // A full team rejects even a player already listed with TeamFull.
        match admit(&[1, 2, 3], 2) {
            Err(DomainError::Conflict(ConflictKind::TeamFull, _)) => {}
            other => panic!("expected TeamFull, got {other:?}"),
        }
    }

    #[test]
    fn admit_rejects_duplicate() {
        match admit(&[1, 2], 2) {
            Err(DomainError::Conflict(ConflictKind::DuplicateMember, _)) => {}
            other => panic!("expected DuplicateMember, got {other:?}"),
        }
    }

    #[test]
    fn seats_are_append_only() {
        assert_eq!(next_seat(&[]), 0);
        assert_eq!(next_seat(&[0, 1]), 2);
        // Seat 1 left earlier; holes are not reused.
        assert_eq!(next_seat(&[0, 2]), 3);
    }

    #[test]
    fn without_preserves_order() {
        let (remaining, removed) = without(&[7, 8, 9], 8);
        assert!(removed);
        assert_eq!(remaining, vec![7, 9]);
    }

    #[test]
    fn without_non_member_is_noop() {
        let (remaining, removed) = without(&[7, 8, 9], 42);
        assert!(!removed);
        assert_eq!(remaining, vec![7, 8, 9]);
    }
}
