//! API data transfer objects.
//!
//! These types define the JSON contract of the HTTP endpoints. Every response carries an
//! `rt` field of `"OK"` or `"FAIL"`; domain failures are reported there rather than through
//! HTTP status codes.

pub mod api;
pub mod imageboard;
pub mod member;
