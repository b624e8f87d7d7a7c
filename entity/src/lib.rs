//! SeaORM entities for the imageboard backend.

pub mod prelude;

pub mod imageboard;
pub mod member;
