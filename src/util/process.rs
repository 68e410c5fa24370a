//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use anyhow::{bail, Context, Result};

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Execute the command and wait for completion.
    pub fn exec(&self) -> Result<Output> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("running `{}`", self.display_command());

        cmd.output()
            .with_context(|| format!("failed to spawn `{}`", self.program.display()))
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for ProcessOutput {
    fn from(output: Output) -> Self {
        ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs external programs.
///
/// The git and GitHub CLI glue goes through this trait so it can be driven
/// by a mock in tests.
pub trait Executor {
    /// Run `program` with `args` and capture its output. Only failing to
    /// start the program is an error; a non-zero exit is reported in the
    /// returned output.
    fn run(&mut self, program: &str, args: &[&str]) -> Result<ProcessOutput>;

    /// Whether `program` can be found on `PATH`.
    fn is_available(&self, program: &str) -> bool;

    /// Run and require a zero exit status.
    fn run_checked(&mut self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let output = self.run(program, args)?;
        if !output.success() {
            bail!(
                "`{} {}` failed with exit code {:?}\n{}",
                program,
                args.join(" "),
                output.code,
                output.stderr.trim_end()
            );
        }
        Ok(output)
    }
}

/// Executor that spawns real processes in a working directory.
#[derive(Debug, Clone)]
pub struct SystemExecutor {
    cwd: PathBuf,
}

impl SystemExecutor {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        SystemExecutor { cwd: cwd.into() }
    }
}

impl Executor for SystemExecutor {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let output = ProcessBuilder::new(program)
            .args(args)
            .cwd(&self.cwd)
            .exec()?;
        Ok(output.into())
    }

    fn is_available(&self, program: &str) -> bool {
        find_executable(program).is_some()
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
