//! Test shell bootstrap for an embedded WebView engine.
//!
//! The crate owns exactly one thing: the ordered, run-once startup sequence
//! that takes the host process from "freshly launched" to "engine ready to
//! receive commands". See [`bootstrap::Bootstrap`] for the sequence and its
//! ordering contract. Everything the sequence calls — resource registration,
//! command-line loading, extraction configuration, the native engine — is a
//! collaborator behind a trait so test runners can instrument or stub it.

pub mod bootstrap;
pub mod debugger;
pub mod engine;
pub mod error;
pub mod logger;
pub mod resources;
pub mod switches;

pub use bootstrap::{Bootstrap, Phase, Ready};
pub use error::AppError;
