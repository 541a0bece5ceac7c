//! Shared types for the seating service
//!
//! Domain models, the unified error system and small utilities used by
//! `seating-server` and by anything that talks to its HTTP API.

pub mod error;
pub mod models;
pub mod util;
