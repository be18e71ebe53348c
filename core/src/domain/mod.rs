pub mod common;
pub mod health;
pub mod inventory;
pub mod recipe;
