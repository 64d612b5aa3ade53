//! Vietnamese input engine exported to the macOS frontend through UniFFI.

uniffi::setup_scaffolding!();

mod api;
mod trace_init;

pub use api::*;
