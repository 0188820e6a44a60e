pub mod error;
pub mod job;
pub mod manifest;
pub mod runner;

pub use error::{BatchError, BatchResult};
pub use job::{CompileJob, CompileJobBuilder};
pub use runner::{artifact_name, BatchMode, BatchReport, ShaderOutcome, ShaderReport};

/// The compiler command used when none is configured.
/// It is resolved through the executable search path.
pub const DEFAULT_COMPILER: &str = "glslangValidator";

/// The extension appended to a shader filename to name its compiled artifact.
pub const SPV_EXTENSION: &str = "spv";
