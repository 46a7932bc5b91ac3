//! Default room/team plan applied by the bootstrap initializer.

/// A room to create at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSeed {
    pub name: &'static str,
    pub turn_seconds: i32,
}

/// Rooms recreated on every boot.
pub const DEFAULT_ROOMS: [RoomSeed; 2] = [
    RoomSeed {
        name: "Classic",
        turn_seconds: 60,
    },
    RoomSeed {
        name: "Blitz",
        turn_seconds: 30,
    },
];

/// Empty teams created in every default room, in display order.
pub const DEFAULT_TEAMS: [&str; 3] = ["Red", "Blue", "Green"];

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ROOMS, DEFAULT_TEAMS};

    #[test]
    fn two_rooms_three_teams() {
        assert_eq!(DEFAULT_ROOMS.len(), 2);
        assert_eq!(DEFAULT_TEAMS.len(), 3);
    }

    #[test]
    fn room_names_are_unique() {
        assert_ne!(DEFAULT_ROOMS[0].name, DEFAULT_ROOMS[1].name);
    }

    #[test]
    fn turn_durations_are_sane() {
        for seed in DEFAULT_ROOMS {
            assert!(seed.turn_seconds >= 10 && seed.turn_seconds <= 600);
        }
    }
}
