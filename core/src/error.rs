use std::{io, path::PathBuf};

use thiserror::Error;

pub type BatchResult<T> = std::result::Result<T, BatchError>;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("The compiler command cannot be empty")]
    EmptyCompiler,

    #[error("Unable to read the shader manifest at {path}")]
    Manifest { path: PathBuf, source: io::Error },

    #[error(
        "Unable to access the file at the given path. Make sure the right permissions are available"
    )]
    Io(#[from] io::Error),
}
