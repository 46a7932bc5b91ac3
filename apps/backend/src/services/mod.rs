pub mod bootstrap;
pub mod messages;
pub mod rooms;
pub mod scores;
pub mod teams;
