//! File-Backed Todo Service Library
//!
//! This library crate defines the modules behind the todo HTTP service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two layers:
//!
//! - **`store`**: The persistence layer. Implements CRUD over the todo array
//!   backed by a single JSON file, rewriting the file in full on every mutation.
//! - **`api`**: The HTTP boundary. Translates requests into store calls and
//!   maps store results and errors onto status codes and JSON bodies. Also
//!   serves the embedded browser client.

pub mod api;
pub mod store;
