//! HTTP request handlers.
//!
//! Controllers extract query parameters, JSON bodies and multipart forms, call the
//! matching service, and convert the result into a DTO carrying the `rt` field.

pub mod imageboard;
pub mod member;
pub mod param;

#[cfg(test)]
mod test;
