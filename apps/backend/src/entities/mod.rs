pub mod messages;
pub mod rooms;
pub mod round_results;
pub mod team_players;
pub mod teams;
pub mod users;
