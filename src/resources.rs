//! Packaged resources: registration and extraction configuration.
//!
//! The engine cannot start without a small fixed set of pak files. The shell
//! declares that set statically and hands it to the extraction collaborator
//! as one value, together with the locale policy, so there is no window in
//! which a partially-configured extractor can run.

use tracing::{debug, info};

use crate::error::AppError;

/// The minimum set of pak files the test runner needs.
pub const MANDATORY_PAKS: [&str; 3] = ["webviewchromium.pak", "en-US.pak", "icudtl.dat"];

/// Registers the shell's packaged asset identifiers with the host
/// environment. Must run before anything that might reference them.
pub trait ResourceRegistrar: Send {
    fn register(&mut self) -> Result<(), AppError>;
}

/// Configuration handed whole to the extraction collaborator.
///
/// Identical for every run of the test shell, regardless of command-line
/// content: the same three mandatory paks, and implicit per-locale
/// extraction disabled so runs do not depend on the device locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Pak files that must be extracted before the engine starts.
    pub mandatory_paks: Vec<String>,
    /// Whether the extractor may auto-discover the device locale's paks.
    pub extract_implicit_locale: bool,
}

impl ExtractionConfig {
    /// The test shell's fixed configuration.
    pub fn test_shell() -> Self {
        Self {
            mandatory_paks: MANDATORY_PAKS.iter().map(|s| s.to_string()).collect(),
            extract_implicit_locale: false,
        }
    }
}

/// Receives the extraction configuration before any extraction is triggered
/// downstream by the engine load.
pub trait ResourceExtractor: Send {
    fn configure(&mut self, config: ExtractionConfig) -> Result<(), AppError>;
}

/// Production registrar: contributes the shell's UI resource ids.
///
/// The host-side registration mechanism lives outside this crate; this
/// adapter records the contribution and logs it.
#[derive(Debug, Default)]
pub struct ShellResourceRegistrar;

impl ResourceRegistrar for ShellResourceRegistrar {
    fn register(&mut self) -> Result<(), AppError> {
        debug!("shell resource providers registered");
        Ok(())
    }
}

/// Production extractor collaborator: forwards the configuration to the
/// extraction mechanism (outside this crate) and logs what was handed over.
#[derive(Debug, Default)]
pub struct PakExtractor {
    config: Option<ExtractionConfig>,
}

impl PakExtractor {
    pub fn config(&self) -> Option<&ExtractionConfig> {
        self.config.as_ref()
    }
}

impl ResourceExtractor for PakExtractor {
    fn configure(&mut self, config: ExtractionConfig) -> Result<(), AppError> {
        info!(
            mandatory_paks = ?config.mandatory_paks,
            extract_implicit_locale = config.extract_implicit_locale,
            "resource extraction configured"
        );
        self.config = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_config_is_fixed() {
        let config = ExtractionConfig::test_shell();
        assert_eq!(
            config.mandatory_paks,
            vec!["webviewchromium.pak", "en-US.pak", "icudtl.dat"]
        );
        assert!(!config.extract_implicit_locale);
        // Same value every time it is built.
        assert_eq!(config, ExtractionConfig::test_shell());
    }

    #[test]
    fn pak_extractor_stores_config() {
        let mut extractor = PakExtractor::default();
        assert!(extractor.config().is_none());
        extractor.configure(ExtractionConfig::test_shell()).unwrap();
        assert_eq!(extractor.config(), Some(&ExtractionConfig::test_shell()));
    }
}
