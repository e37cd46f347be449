//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing jscs-task CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the jscs-task binary.
///
/// Color and the env fallbacks of global flags are cleared so the
/// surrounding environment cannot leak into a spec.
pub fn jscs_task_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jscs-task"));
    cmd.env_remove("JSCS_TASK_MANIFEST")
        .env_remove("JSCS_BIN")
        .env_remove("JSCS_TASK_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Builder for `jscs-task check`
pub fn check() -> TaskBuilder {
    TaskBuilder::new("check")
}

/// Builder for `jscs-task run`
pub fn run() -> TaskBuilder {
    TaskBuilder::new("run")
}

/// Builder for `jscs-task config`
pub fn config() -> TaskBuilder {
    TaskBuilder::new("config")
}

/// Fluent builder around one subcommand invocation
pub struct TaskBuilder {
    subcommand: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TaskBuilder {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Run in a fixture directory
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Run in an arbitrary directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        run_passes(self.command())
    }

    pub fn fails(self) -> RunAssert {
        run_fails(self.command())
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    fn command(self) -> Command {
        let mut cmd = jscs_task_cmd();
        cmd.arg(self.subcommand);
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

fn run_passes(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run_fails(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        !output.status.success(),
        "expected failure, got success\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    RunAssert { output }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected (with diff on failure)
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Stand-in for the jscs program.
///
/// Reports one `disallowStyleErrors` error per line containing `STYLE_ERROR`,
/// an `Unexpected token` error for the first line containing `SYNTAX_ERROR`,
/// and fails the whole batch when the config mentions `unsupportedRule`.
/// The config it was given is copied to `.last-jscs-config.json`.
pub const STUB_CHECKER: &str = r#"#!/bin/sh
config=""
files=""
while [ $# -gt 0 ]; do
  case "$1" in
    --config) config="$2"; shift 2 ;;
    --reporter) shift 2 ;;
    *) files="$files $1"; shift ;;
  esac
done
cp "$config" .last-jscs-config.json
if grep -q '"unsupportedRule"' "$config"; then
  echo "Unsupported rule: unsupportedRule" >&2
  exit 1
fi
status=0
printf '{'
sep=""
for f in $files; do
  printf '%s"%s":[' "$sep" "$f"
  sep=","
  inner=""
  for line in $(grep -n 'STYLE_ERROR' "$f" | cut -d: -f1); do
    printf '%s{"line":%s,"column":0,"message":"Style error marker found","rule":"disallowStyleErrors"}' "$inner" "$line"
    inner=","
    status=2
  done
  if grep -q 'SYNTAX_ERROR' "$f"; then
    line=$(grep -n 'SYNTAX_ERROR' "$f" | head -n 1 | cut -d: -f1)
    printf '%s{"line":%s,"column":4,"message":"Unexpected token (%s:4)"}' "$inner" "$line" "$line"
    status=2
  fi
  printf ']'
done
printf '}\n'
exit $status
"#;

/// Temporary test project directory with helper methods.
///
/// ```ignore
/// let temp = Project::with_checker();
/// temp.file(".jscsrc", r#"{"requireCurlyBraces": ["if"]}"#);
/// temp.file("lib/a.js", "STYLE_ERROR\n");
/// check().pwd(temp.path()).args(&["lib"]).exits(1);
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with the stub checker at `node_modules/.bin/jscs`
    #[cfg(unix)]
    pub fn with_checker() -> Self {
        let temp = Self::empty();
        temp.executable("node_modules/.bin/jscs", STUB_CHECKER);
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.dir.path().join(path.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Write an executable script
    #[cfg(unix)]
    pub fn executable(&self, path: impl AsRef<Path>, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.file(path.as_ref(), content);
        let full = self.dir.path().join(path.as_ref());
        std::fs::set_permissions(full, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Write jscs-task.toml (auto-prefixes with `version = 1` if not present)
    pub fn manifest(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("jscs-task.toml", &content);
    }

    /// Read a file back
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    /// Config the checker was last run with
    pub fn last_checker_config(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(".last-jscs-config.json")).unwrap()
    }
}
