pub mod roster;
pub mod user;
