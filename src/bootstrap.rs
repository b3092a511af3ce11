//! The bootstrap sequence — the shell's one-time startup contract.
//!
//! Five steps, strictly in order, exactly once per process:
//!
//! 1. register resource providers
//! 2. load command-line state from the on-device switches file
//! 3. if `wait-for-debugger` is set, block until a debugger attaches
//! 4. hand the extraction collaborator its fixed configuration
//! 5. trigger the native engine load
//!
//! Each step's precondition is exactly "all prior steps completed"; there is
//! no retry and no rollback. A collaborator error propagates out of
//! [`Bootstrap::run`] and startup fails as a whole.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::debugger::DebuggerGate;
use crate::engine::EngineLoader;
use crate::error::AppError;
use crate::resources::{ExtractionConfig, ResourceExtractor, ResourceRegistrar};
use crate::switches::{self, CommandLine};

/// Loads the process-wide command-line state. Absence of the backing file
/// yields an empty [`CommandLine`], never an error.
pub trait CommandLineLoader: Send {
    fn load(&mut self) -> CommandLine;
}

/// Bootstrap state machine. Transitions are one-way; [`Phase::Ready`] is
/// terminal for this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Uninitialized,
    ResourcesRegistered,
    CommandLineLoaded,
    DebuggerGateResolved,
    ExtractionConfigured,
    EngineLoading,
    Ready,
}

/// Result of a completed bootstrap: the immutable command-line state, owned
/// by the caller from here on and passed explicitly to whatever needs it.
#[derive(Debug)]
pub struct Ready {
    pub command_line: CommandLine,
}

/// Owns the five collaborators and runs them in order.
///
/// Built once in `main` with production collaborators (or in tests with
/// recording/stub ones) and consumed by [`Bootstrap::run`].
pub struct Bootstrap {
    registrar: Box<dyn ResourceRegistrar>,
    command_line: Box<dyn CommandLineLoader>,
    gate: Box<dyn DebuggerGate>,
    extractor: Box<dyn ResourceExtractor>,
    engine: Box<dyn EngineLoader>,
    phase: Phase,
}

impl Bootstrap {
    pub fn new(
        registrar: Box<dyn ResourceRegistrar>,
        command_line: Box<dyn CommandLineLoader>,
        gate: Box<dyn DebuggerGate>,
        extractor: Box<dyn ResourceExtractor>,
        engine: Box<dyn EngineLoader>,
    ) -> Self {
        Self {
            registrar,
            command_line,
            gate,
            extractor,
            engine,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the whole sequence on the calling thread.
    ///
    /// The only suspension point is the debugger gate, which blocks
    /// indefinitely when the switch is set. Consumes `self`: the sequence
    /// cannot be re-entered or resumed within one process lifetime.
    pub fn run(mut self) -> Result<Ready, AppError> {
        self.registrar.register()?;
        self.advance(Phase::ResourcesRegistered);

        let command_line = self.command_line.load();
        self.advance(Phase::CommandLineLoaded);

        if command_line.has_switch(switches::WAIT_FOR_DEBUGGER) {
            warn!("Waiting for debugger to connect...");
            self.gate.wait();
            warn!("Debugger connected. Resuming execution.");
        }
        self.advance(Phase::DebuggerGateResolved);

        self.extractor.configure(ExtractionConfig::test_shell())?;
        self.advance(Phase::ExtractionConfigured);

        self.advance(Phase::EngineLoading);
        self.engine.load()?;
        self.advance(Phase::Ready);

        info!(switches = command_line.len(), "engine ready");
        Ok(Ready { command_line })
    }

    fn advance(&mut self, next: Phase) {
        // One-way machine: a non-monotonic transition is a programming error.
        debug_assert!(next > self.phase, "phase went backwards: {:?} -> {next:?}", self.phase);
        debug!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }
}

/// Build a [`Bootstrap`] wired with the production collaborators, loading
/// switches from `command_line_file`.
pub fn production(command_line_file: &Path) -> Bootstrap {
    use crate::debugger::TracerPidGate;
    use crate::engine::NativeEngineLoader;
    use crate::resources::{PakExtractor, ShellResourceRegistrar};
    use crate::switches::FileCommandLineLoader;

    Bootstrap::new(
        Box::new(ShellResourceRegistrar),
        Box::new(FileCommandLineLoader::new(command_line_file.to_path_buf())),
        Box::new(TracerPidGate::default()),
        Box::new(PakExtractor::default()),
        Box::new(NativeEngineLoader),
    )
}
