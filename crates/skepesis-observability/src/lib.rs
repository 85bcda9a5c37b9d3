//! # skepesis-observability
//!
//! Tracing subscriber setup plus the span and event vocabulary used by the
//! analysis layers. The calibration engine itself never logs; its callers
//! record what it computed through [`events`].

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::spans::names;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
