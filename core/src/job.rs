use std::path::PathBuf;

use crate::{
    error::{BatchError, BatchResult},
    DEFAULT_COMPILER,
};

/// A builder for a compile job.
#[derive(Clone)]
pub struct CompileJobBuilder {
    compiler: PathBuf,
    shaders: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
    inherit_output: bool,
}

impl Default for CompileJobBuilder {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.into(),
            shaders: Vec::new(),
            working_dir: None,
            inherit_output: false,
        }
    }
}

impl CompileJobBuilder {
    /// Creates a new CompileJobBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compiler command to invoke.
    /// Changing it changes which binary runs, never the shape or order
    /// of the arguments it receives.
    pub fn compiler(mut self, compiler: impl Into<PathBuf>) -> Self {
        self.compiler = compiler.into();

        self
    }

    /// Appends a shader to the list.
    pub fn shader(mut self, shader: impl Into<PathBuf>) -> Self {
        self.shaders.push(shader.into());

        self
    }

    /// Appends several shaders, keeping their order.
    pub fn shaders<I>(mut self, shaders: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        self.shaders.extend(shaders.into_iter().map(Into::into));

        self
    }

    /// Sets the directory the compiler runs in.
    /// Inputs are read and artifacts written relative to it.
    /// Defaults to the current working directory of the driver.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());

        self
    }

    /// Lets the compiler inherit the driver's stdout/stderr instead of
    /// having its output captured into the batch report.
    pub fn inherit_output(mut self, inherit: bool) -> Self {
        self.inherit_output = inherit;

        self
    }

    /// Builds a CompileJob with the specified parameters.
    pub fn build(self) -> BatchResult<CompileJob> {
        if self.compiler.as_os_str().is_empty() {
            return Err(BatchError::EmptyCompiler);
        }

        Ok(CompileJob {
            compiler: self.compiler,
            shaders: self.shaders,
            working_dir: self.working_dir,
            inherit_output: self.inherit_output,
        })
    }
}

/// Everything needed to drive one batch of shader compilations.
#[derive(Clone, Debug)]
pub struct CompileJob {
    /// The compiler command.
    pub compiler: PathBuf,
    /// The shader source files, compiled in this order.
    pub shaders: Vec<PathBuf>,
    /// The directory the compiler runs in, if not the driver's own.
    pub working_dir: Option<PathBuf>,
    /// Whether the compiler's output goes straight to the terminal.
    pub inherit_output: bool,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{job::CompileJobBuilder, BatchError, DEFAULT_COMPILER};

    #[test]
    fn test_builder_defaults() {
        let job = CompileJobBuilder::new().build().unwrap();

        assert_eq!(Path::new(DEFAULT_COMPILER), job.compiler);
        assert!(job.shaders.is_empty());
        assert!(job.working_dir.is_none());
        assert!(!job.inherit_output);
    }

    #[test]
    fn test_builder_keeps_shader_order() {
        let job = CompileJobBuilder::new()
            .shader("render_scene.vert")
            .shaders(["prepare_gbuffer.frag", "ssao.frag"])
            .shader("gaussian_blur.comp")
            .build()
            .unwrap();

        let expected = [
            "render_scene.vert",
            "prepare_gbuffer.frag",
            "ssao.frag",
            "gaussian_blur.comp",
        ];

        assert!(job.shaders.iter().map(Path::new).eq(expected.map(Path::new)));
    }

    #[test]
    fn test_builder_rejects_empty_compiler() {
        let err = CompileJobBuilder::new().compiler("").build().unwrap_err();

        assert!(matches!(err, BatchError::EmptyCompiler));
    }
}
