//! Imageboard Test Utils
//!
//! Provides shared testing utilities for the imageboard backend. This crate offers a builder
//! for creating test contexts with in-memory SQLite databases whose tables are generated from
//! the SeaORM entities, plus fixtures and factories for `member` and `imageboard` rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_entries() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_imageboard_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::imageboard::create_entries(db, 12).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod upload;
