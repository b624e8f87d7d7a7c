//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each repository method issues a single query.

pub mod imageboard;
pub mod member;

#[cfg(test)]
mod test;
