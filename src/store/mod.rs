//! Record Store Module
//!
//! Durable CRUD over the todo array, backed by a single JSON file.
//!
//! ## Core Concepts
//! - **Full rewrite**: every mutation loads the whole array from disk, changes
//!   it in memory and rewrites the file in full. No partial writes.
//! - **Stateless between requests**: nothing is cached across operations; the
//!   file is the only durable state.
//! - **Serialized mutations**: a mutex guards the read-modify-write cycle so
//!   concurrent writers cannot overwrite each other's effect.
//! - **Silent recovery**: a missing or unparsable file reads as an empty
//!   array, since the first run starts without one.

pub mod file;
pub mod types;
