//! DogHouse - Dog Record Service
//!
//! This crate implements a small HTTP service managing "dog" records
//! (create, list, paginate) with every inbound request passing through a
//! sliding-window admission-control layer. The limiter enforces a hard
//! "at most N requests per rolling window" bound under concurrent load.

pub mod config;
pub mod dogs;
pub mod error;
pub mod http;
pub mod ratelimit;
