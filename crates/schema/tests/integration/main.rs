//! End-to-end tests for tessel-schema through its public API.

mod checkers;
mod properties;
mod serde_interop;
mod structure;
