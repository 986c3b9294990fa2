//! # tessera-observability
//!
//! Structured logging for Tessera: subscriber initialization filtered by
//! `TESSERA_LOG`, and the named events the safety gate and query pipeline
//! emit.

pub mod tracing_setup;

pub use tracing_setup::{
    events, init_tracing, init_tracing_with_filter, try_init_from_config, try_init_tracing,
};
