use std::process::ExitStatus;

use thiserror::Error;

/// Why the rendering program failed to produce an image.
///
/// Never fatal: a run that cannot render still leaves a complete `site.dot`.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("renderer `{program}` was not found on PATH")]
    NotFound { program: String },

    #[error("renderer `{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to run renderer: {0}")]
    Io(#[from] std::io::Error),
}
