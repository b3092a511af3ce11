//! Debugger-attach gate.
//!
//! When the `wait-for-debugger` switch is set, the bootstrap blocks the
//! primary thread until a debugger attaches — indefinitely, with no timeout.
//! The gate is a trait so automated tests inject a pre-resolved or
//! channel-backed stand-in instead of genuinely stalling.

use std::time::Duration;

use tracing::trace;

/// A one-shot blocking checkpoint: returns only once a debugger is attached.
pub trait DebuggerGate: Send {
    fn wait(&mut self);
}

/// Production gate: polls the kernel's tracer-pid field until a tracer
/// (a debugger such as gdb or lldb) attaches to this process.
#[derive(Debug)]
pub struct TracerPidGate {
    poll_interval: Duration,
}

impl Default for TracerPidGate {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(200),
        }
    }
}

impl DebuggerGate for TracerPidGate {
    fn wait(&mut self) {
        loop {
            if debugger_attached() {
                return;
            }
            trace!("no tracer attached yet");
            std::thread::sleep(self.poll_interval);
        }
    }
}

/// Whether a tracer is currently attached to this process.
///
/// Reads `TracerPid` from `/proc/self/status`; on platforms without procfs
/// this reports `false`, so the production gate blocks until killed —
/// operator intervention is the documented resolution either way.
pub fn debugger_attached() -> bool {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => tracer_pid(&status).is_some_and(|pid| pid != 0),
        Err(_) => false,
    }
}

/// Parse the `TracerPid:` line out of a `/proc/<pid>/status` dump.
fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|rest| rest.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_UNTRACED: &str =
        "Name:\twebview-shell\nUmask:\t0022\nState:\tR (running)\nTracerPid:\t0\nUid:\t0\t0\t0\t0\n";
    const STATUS_TRACED: &str =
        "Name:\twebview-shell\nUmask:\t0022\nState:\tt (tracing stop)\nTracerPid:\t4242\nUid:\t0\t0\t0\t0\n";

    #[test]
    fn tracer_pid_zero_when_untraced() {
        assert_eq!(tracer_pid(STATUS_UNTRACED), Some(0));
    }

    #[test]
    fn tracer_pid_found_when_traced() {
        assert_eq!(tracer_pid(STATUS_TRACED), Some(4242));
    }

    #[test]
    fn tracer_pid_absent_in_garbage() {
        assert_eq!(tracer_pid("not a status file"), None);
        assert_eq!(tracer_pid(""), None);
    }
}
