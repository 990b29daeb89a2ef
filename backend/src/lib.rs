//! # Users API Backend
//!
//! A small REST facade over a document store exposing list/get/create
//! operations on a single users collection.
//!
//! ## Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`db`]: Store access via the repository pattern, with MongoDB and
//!   in-memory backends behind a common trait
//! - [`http`]: Axum-based HTTP server, middleware, and request handlers
//!
//! The store connection is attempted exactly once at startup. While it is
//! not established every request is answered with 503; there is no retry, a
//! restart is the recovery path.

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
