//! Remote session backend adapter.
//!
//! The remote service only understands free-text prompting over ephemeral
//! sessions: create → submit → poll → delete. This module wraps that
//! four-phase protocol into the single-exchange port the engine consumes,
//! with one independent timeout per failure mode (submission hang, slow
//! generation, cleanup hang).

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
pub mod transport;
