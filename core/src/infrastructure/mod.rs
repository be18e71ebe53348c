pub mod db;
pub mod health;
pub mod inventory;
pub mod llm;
pub mod recipe;
