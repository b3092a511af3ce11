//! Process-wide command-line state, loaded once from an on-device file.
//!
//! Test devices have no way to pass real argv to the shell, so switches are
//! read from a well-known plain-text file instead. The file holds a single
//! command line: a program-name token followed by `--name[=value]` switches.
//! A missing file is not an error — it simply means "no switches set".
//!
//! The loaded [`CommandLine`] is immutable and is threaded explicitly through
//! the bootstrap rather than parked in a global, so nothing can observe it
//! before it exists.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::bootstrap::CommandLineLoader;

/// Fixed on-device path of the switches file in the reference deployment.
pub const COMMAND_LINE_FILE: &str = "/data/local/tmp/android-webview-command-line";

/// Env var overriding [`COMMAND_LINE_FILE`], for running the shell on hosts
/// where `/data/local/tmp` does not exist.
pub const COMMAND_LINE_FILE_ENV: &str = "WEBVIEW_COMMAND_LINE_FILE";

/// Boolean switch: block startup until a debugger attaches.
pub const WAIT_FOR_DEBUGGER: &str = "wait-for-debugger";

/// Resolve the switches-file path: env override first, fixed path otherwise.
pub fn command_line_file() -> PathBuf {
    std::env::var_os(COMMAND_LINE_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(COMMAND_LINE_FILE))
}

/// Immutable switch-name → optional-value map for one process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    switches: HashMap<String, Option<String>>,
}

impl CommandLine {
    /// An empty command line — the state after a missing or unreadable file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from the switches file at `path`.
    ///
    /// Infallible by contract: a missing file yields the empty state, and an
    /// unreadable or non-UTF-8 file yields the empty state with a `warn` so
    /// a corrupted file on a test device is at least visible in the log.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let cl = Self::parse(&contents);
                debug!(path = %path.display(), switches = cl.len(), "command line loaded");
                cl
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no switches file, command line empty");
                Self::empty()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable switches file, command line empty");
                Self::empty()
            }
        }
    }

    /// Parse one command line of whitespace-separated tokens.
    ///
    /// A leading token that does not start with `--` is the program name and
    /// is skipped. A bare `--` ends switch parsing; everything after it (and
    /// any other non-switch token) is ignored.
    pub fn parse(contents: &str) -> Self {
        let mut switches = HashMap::new();
        let mut tokens = contents.split_whitespace().peekable();

        if let Some(first) = tokens.peek() {
            if !first.starts_with("--") {
                tokens.next();
            }
        }

        for token in tokens {
            if token == "--" {
                break;
            }
            let Some(body) = token.strip_prefix("--") else {
                continue;
            };
            match body.split_once('=') {
                Some((name, value)) => {
                    switches.insert(name.to_string(), Some(value.to_string()));
                }
                None => {
                    switches.insert(body.to_string(), None);
                }
            }
        }

        Self { switches }
    }

    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.contains_key(name)
    }

    /// Value of a `--name=value` switch; `None` for boolean or absent switches.
    pub fn switch_value(&self, name: &str) -> Option<&str> {
        self.switches.get(name).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

/// Production command-line collaborator: loads [`CommandLine`] from a file.
#[derive(Debug)]
pub struct FileCommandLineLoader {
    path: PathBuf,
}

impl FileCommandLineLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CommandLineLoader for FileCommandLineLoader {
    fn load(&mut self) -> CommandLine {
        CommandLine::from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn boolean_and_valued_switches_parse() {
        let cl = CommandLine::parse("_ --wait-for-debugger --user-agent=TestShell/1.0");
        assert!(cl.has_switch("wait-for-debugger"));
        assert_eq!(cl.switch_value("wait-for-debugger"), None);
        assert_eq!(cl.switch_value("user-agent"), Some("TestShell/1.0"));
        assert_eq!(cl.len(), 2);
    }

    #[test]
    fn leading_program_name_is_skipped() {
        let cl = CommandLine::parse("webview-shell --foo");
        assert!(!cl.has_switch("webview-shell"));
        assert!(cl.has_switch("foo"));
    }

    #[test]
    fn leading_switch_is_not_mistaken_for_program_name() {
        let cl = CommandLine::parse("--foo --bar=1");
        assert!(cl.has_switch("foo"));
        assert_eq!(cl.switch_value("bar"), Some("1"));
    }

    #[test]
    fn double_dash_terminates_switch_parsing() {
        let cl = CommandLine::parse("_ --foo -- --bar");
        assert!(cl.has_switch("foo"));
        assert!(!cl.has_switch("bar"));
    }

    #[test]
    fn empty_and_whitespace_files_yield_empty_state() {
        assert!(CommandLine::parse("").is_empty());
        assert!(CommandLine::parse("  \n\t ").is_empty());
        assert!(CommandLine::parse("_").is_empty());
    }

    #[test]
    fn missing_file_yields_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let cl = CommandLine::from_file(&dir.path().join("no-such-file"));
        assert!(cl.is_empty());
    }

    #[test]
    fn non_utf8_file_yields_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("command-line");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0xff, 0xfe, 0x80]).unwrap();
        drop(f);
        assert!(CommandLine::from_file(&path).is_empty());
    }

    #[test]
    fn file_loader_reads_switches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("command-line");
        std::fs::write(&path, "_ --wait-for-debugger\n").unwrap();
        let mut loader = FileCommandLineLoader::new(path);
        let cl = loader.load();
        assert!(cl.has_switch(WAIT_FOR_DEBUGGER));
    }
}
