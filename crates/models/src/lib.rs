//! SeaORM entities for regions, walks and difficulties, plus the column
//! validators shared by every storage backend.

pub mod errors;
pub mod db;
pub mod region;
pub mod difficulty;
pub mod walk;

#[cfg(test)]
mod tests;
