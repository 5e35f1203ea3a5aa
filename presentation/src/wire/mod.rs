//! External wire format and its adapter.
//!
//! [`types`] holds the serde records of the chat API; [`adapter`] is the
//! pure, stateless mapping between those records and the engine's types.

pub mod adapter;
pub mod types;
