//! Core types and traits for the catalog service.
//!
//! Pure domain logic lives here: the course model and its validation, the
//! cache and storage traits, cache key and serialization policy, and the
//! error taxonomy shared by every backend.

pub mod cache;
pub mod course;
pub mod storage;
