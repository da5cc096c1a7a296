//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis for multi-instance deployments.
//! Entries are plain string keys with an optional `EX` expiry.

mod cache;
mod error;

pub use cache::RedisCache;
