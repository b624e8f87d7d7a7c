//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Stamping write dates, computing page navigation, verifying deletes
//! - **Orchestration**: Coordinating upload storage with repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod imageboard;
pub mod member;
pub mod storage;
