//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//! let entry = fixture::imageboard::entity();
//! ```

pub mod imageboard;
pub mod member;

pub use imageboard::entity as imageboard_entity;
pub use member::entity as member_entity;
