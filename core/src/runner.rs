use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{job::CompileJob, SPV_EXTENSION};

/// How a batch drives the compiler for each shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchMode {
    /// `-V <input> -o <input>.spv`: emit a SPIR-V artifact beside the input.
    Compile,
    /// `-V <input>`: parse and validate only, nothing written.
    Check,
}

/// The result of driving the compiler for a single shader.
#[derive(Clone, Debug)]
pub enum ShaderOutcome {
    /// The compiler exited successfully.
    Compiled,
    /// The compiler ran but exited nonzero.
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The compiler process could not be started at all.
    NotLaunched { reason: String },
}

impl ShaderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ShaderOutcome::Compiled)
    }

    /// The exit code of the compiler, if it ran and reported one.
    pub fn code(&self) -> Option<i32> {
        match self {
            ShaderOutcome::Failed { code, .. } => *code,
            ShaderOutcome::Compiled => Some(0),
            ShaderOutcome::NotLaunched { .. } => None,
        }
    }
}

/// One entry of a batch report.
#[derive(Clone, Debug)]
pub struct ShaderReport {
    pub shader: PathBuf,
    pub outcome: ShaderOutcome,
}

/// Per-shader outcomes of a whole batch, in list order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub shaders: Vec<ShaderReport>,
}

impl BatchReport {
    /// `true` if every listed shader went through the compiler successfully.
    /// An empty batch is a success.
    pub fn is_success(&self) -> bool {
        self.shaders.iter().all(|entry| entry.outcome.is_success())
    }

    /// The entries whose compilation did not succeed, in list order.
    pub fn failures(&self) -> impl Iterator<Item = &ShaderReport> {
        self.shaders
            .iter()
            .filter(|entry| !entry.outcome.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// The number of shaders driven.
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

/// The artifact written for a shader: the input name with `.spv` appended.
pub fn artifact_name(shader: &Path) -> PathBuf {
    let mut name = shader.as_os_str().to_owned();
    name.push(".");
    name.push(SPV_EXTENSION);

    PathBuf::from(name)
}

/// The compiler arguments for one shader under the given mode.
// The stage (vertex, fragment, compute) is inferred by the compiler from the
// file extension, so the name is passed through untouched.
pub fn shader_args(shader: &Path, mode: BatchMode) -> Vec<OsString> {
    let mut args = vec![OsString::from("-V"), shader.as_os_str().to_owned()];

    if mode == BatchMode::Compile {
        args.push("-o".into());
        args.push(artifact_name(shader).into_os_string());
    }

    args
}

impl CompileJob {
    /// Drives the compiler once per listed shader, synchronously, in order.
    ///
    /// A shader the compiler rejects never stops the batch: its outcome is
    /// recorded and the next shader is attempted, so one broken shader still
    /// lets the rest of the set compile.
    pub fn run(&self, mode: BatchMode) -> BatchReport {
        let mut shaders = Vec::with_capacity(self.shaders.len());

        for shader in &self.shaders {
            let args = shader_args(shader, mode);
            debug!(
                "{} {}",
                self.compiler.display(),
                args.iter().map(|arg| arg.to_string_lossy()).join(" ")
            );

            let mut command = Command::new(&self.compiler);
            command.args(&args);
            if let Some(dir) = &self.working_dir {
                command.current_dir(dir);
            }

            let outcome = if self.inherit_output {
                match command.status() {
                    Ok(status) if status.success() => ShaderOutcome::Compiled,
                    Ok(status) => ShaderOutcome::Failed {
                        code: status.code(),
                        stdout: String::new(),
                        stderr: String::new(),
                    },
                    Err(err) => ShaderOutcome::NotLaunched {
                        reason: err.to_string(),
                    },
                }
            } else {
                match command.output() {
                    Ok(output) if output.status.success() => ShaderOutcome::Compiled,
                    Ok(output) => ShaderOutcome::Failed {
                        code: output.status.code(),
                        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    },
                    Err(err) => ShaderOutcome::NotLaunched {
                        reason: err.to_string(),
                    },
                }
            };

            match &outcome {
                ShaderOutcome::Compiled => debug!("{}: ok", shader.display()),
                ShaderOutcome::Failed { code, .. } => {
                    warn!("{}: compiler exited with code {:?}", shader.display(), code)
                }
                ShaderOutcome::NotLaunched { reason } => {
                    warn!("{}: could not run compiler: {}", shader.display(), reason)
                }
            }

            shaders.push(ShaderReport {
                shader: shader.clone(),
                outcome,
            });
        }

        BatchReport { shaders }
    }
}
