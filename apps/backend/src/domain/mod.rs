//! Pure game rules, free of I/O. Services orchestrate these against the
//! repos layer; everything here is unit-testable without a database.

pub mod rotation;
pub mod seed;
pub mod squad;
