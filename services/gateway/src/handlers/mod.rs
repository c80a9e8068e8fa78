pub mod admin;
pub mod bets;
pub mod health;
pub mod summary;
