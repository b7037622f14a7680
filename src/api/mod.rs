//! HTTP API Module
//!
//! Maps the four todo operations onto the record store and shapes the HTTP
//! responses.
//!
//! ## Surface
//! - `GET /todos` — list all records.
//! - `POST /todos` — create a record, returns it with its assigned id.
//! - `PUT /todos/:id` — merge partial fields over an existing record.
//! - `DELETE /todos/:id` — remove a record.
//! - `GET /` and `GET /scripts.js` — the embedded browser client.

pub mod handlers;
pub mod types;
