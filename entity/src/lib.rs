//! SeaORM entity definitions for the roster database.

pub mod prelude;

pub mod user;
