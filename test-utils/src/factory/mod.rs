//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let member = factory::member::create_member(&db).await?;
//!
//! // Using the builder for custom values
//! let entry = factory::imageboard::ImageboardFactory::new(&db)
//!     .image_name("Coffee")
//!     .image1(Some("coffee.jpg"))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod imageboard;
pub mod member;

// Re-export commonly used factory functions for concise usage
pub use imageboard::{create_entries, create_entry};
pub use member::create_member;
